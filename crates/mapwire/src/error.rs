//! Error types for wire decoding.

use thiserror::Error;

/// Error during decoding of a wire block.
///
/// Decoding is all-or-nothing: when any entity in a block fails to decode,
/// the whole call fails and no partial entity is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A string index resolved outside the supplied table.
    #[error("{field} index {index} out of bounds (table size: {size})")]
    IndexOutOfBounds {
        field: &'static str,
        index: usize,
        size: usize,
    },

    /// Parallel wire columns have unequal lengths.
    #[error("{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The dense tag column ended before the terminator for a point.
    #[error("tag run for point at batch position {position} is missing its terminator")]
    TruncatedTagRun { position: usize },

    /// A member type value outside the fixed wire enum.
    #[error("invalid member type: {value}")]
    InvalidMemberType { value: i32 },
}
