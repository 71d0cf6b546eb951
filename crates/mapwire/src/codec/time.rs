//! Epoch-second conversion with the zero "unset" sentinel.
//!
//! The wire carries the mandatory authoring timestamp as a plain integer
//! where `0` means unset, and the optional commit timestamp as an absent
//! field. A real instant at or before the epoch is not representable: it
//! collapses to the sentinel, and the epoch origin itself is deliberately
//! indistinguishable from "unset".

use crate::model::Timestamp;

/// Epoch seconds for a mandatory wire field: `0` when unset or at/before
/// the epoch.
pub fn to_unix(t: Option<Timestamp>) -> i64 {
    match t {
        Some(ts) if ts.unix() > 0 => ts.unix(),
        _ => 0,
    }
}

/// Epoch seconds for an optional wire field: absent instead of the zero
/// sentinel.
pub fn to_unix_opt(t: Option<Timestamp>) -> Option<i64> {
    match t {
        Some(ts) if ts.unix() > 0 => Some(ts.unix()),
        _ => None,
    }
}

/// Inverse of [`to_unix`]: `None` for the sentinel range.
pub fn from_unix(seconds: i64) -> Option<Timestamp> {
    if seconds <= 0 {
        None
    } else {
        Some(Timestamp::from_unix(seconds))
    }
}

/// Inverse of [`to_unix_opt`].
pub fn from_unix_opt(seconds: Option<i64>) -> Option<Timestamp> {
    seconds.and_then(from_unix)
}
