//! The marshaling engine: entity model to and from wire messages.
//!
//! Encode entry points intern strings into a caller-owned [`StringTable`]
//! shared across one block; decode entry points resolve indexes against
//! the block's already-materialized string sequence. Encoding cannot fail;
//! decoding fails on malformed indexes, ragged columns, or truncated tag
//! runs, returning no partial entities.

pub mod delta;
pub mod dense;
pub mod geo;
pub mod point;
pub mod polyline;
pub mod relation;
pub mod strings;
pub mod time;

mod info;
mod members;
mod tags;

pub use dense::{decode_points, encode_points};
pub use point::{decode_point, encode_point};
pub use polyline::{decode_polyline, encode_polyline};
pub use relation::{decode_relation, encode_relation};
pub use strings::StringTable;

use crate::error::DecodeError;

/// Verifies a parallel column has the expected entry count.
pub(crate) fn check_column(
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), DecodeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(DecodeError::LengthMismatch {
            field,
            expected,
            actual,
        })
    }
}
