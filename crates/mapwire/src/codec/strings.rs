//! Shared string dictionary for one encode operation.

use rustc_hash::FxHashMap;

use crate::error::DecodeError;

/// Append-only deduplicating string table.
///
/// One instance is shared by every entity encoded into a block: tag keys
/// and values, member roles, and user names all intern through it. Index 0
/// is reserved and never refers to a real string; the first interned string
/// gets index 1.
///
/// `add` mutates non-atomically, so a table must only be used by one encode
/// pass at a time.
#[derive(Debug, Clone)]
pub struct StringTable {
    strings: Vec<String>,
    indexes: FxHashMap<String, u32>,
}

impl StringTable {
    /// Creates a table holding only the reserved empty entry at index 0.
    pub fn new() -> Self {
        Self {
            strings: vec![String::new()],
            indexes: FxHashMap::default(),
        }
    }

    /// Interns `s` and returns its index. Adding an equal string again
    /// returns the index assigned on first sight; the empty string maps to
    /// the reserved index 0.
    pub fn add(&mut self, s: &str) -> u32 {
        if s.is_empty() {
            return 0;
        }
        if let Some(&index) = self.indexes.get(s) {
            return index;
        }
        let index = self.strings.len() as u32;
        self.strings.push(s.to_string());
        self.indexes.insert(s.to_string(), index);
        index
    }

    /// Number of table entries, including the reserved slot.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when nothing beyond the reserved slot has been interned.
    pub fn is_empty(&self) -> bool {
        self.strings.len() == 1
    }

    /// Borrows the ordered table.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// Consumes the table into the ordered string sequence for the
    /// container layer.
    pub fn into_strings(self) -> Vec<String> {
        self.strings
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounds-checked lookup into a decode-side string table.
pub(crate) fn lookup<'a>(
    table: &'a [String],
    index: usize,
    field: &'static str,
) -> Result<&'a str, DecodeError> {
    table
        .get(index)
        .map(String::as_str)
        .ok_or(DecodeError::IndexOutOfBounds {
            field,
            index,
            size: table.len(),
        })
}
