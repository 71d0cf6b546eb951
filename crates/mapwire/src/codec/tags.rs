//! Tag set conversion to and from parallel index columns.

use crate::codec::strings::{StringTable, lookup};
use crate::error::DecodeError;
use crate::model::{Tag, Tags};

/// Interns a tag set into parallel key/value index columns.
pub(crate) fn encode_tags(tags: &Tags, table: &mut StringTable) -> (Vec<u32>, Vec<u32>) {
    let mut keys = Vec::with_capacity(tags.len());
    let mut vals = Vec::with_capacity(tags.len());
    for tag in tags {
        keys.push(table.add(&tag.key));
        vals.push(table.add(&tag.value));
    }
    (keys, vals)
}

/// Resolves parallel key/value index columns against a decode-side table.
pub(crate) fn decode_tags(
    keys: &[u32],
    vals: &[u32],
    table: &[String],
) -> Result<Tags, DecodeError> {
    if keys.len() != vals.len() {
        return Err(DecodeError::LengthMismatch {
            field: "tag values",
            expected: keys.len(),
            actual: vals.len(),
        });
    }

    let mut tags = Tags::new();
    for (&key, &val) in keys.iter().zip(vals) {
        tags.push(Tag {
            key: lookup(table, key as usize, "tag key")?.to_string(),
            value: lookup(table, val as usize, "tag value")?.to_string(),
        });
    }
    Ok(tags)
}
