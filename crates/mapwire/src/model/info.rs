//! Revision metadata shared by all entity kinds.

use crate::model::{ChangesetId, UserId};

/// Wall-clock time in whole seconds since the Unix epoch, UTC.
///
/// The wire format carries second precision only. Values at or before the
/// epoch cannot be represented on the wire: they collapse to the "unset"
/// sentinel (see [`crate::codec::time`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from Unix epoch seconds.
    pub fn from_unix(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Returns the Unix epoch seconds.
    pub fn unix(self) -> i64 {
        self.0
    }
}

/// Revision metadata for one entity version.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Info {
    /// Version number of this revision.
    pub version: i32,
    /// Authoring time; `None` when unknown.
    pub timestamp: Option<Timestamp>,
    /// Whether this revision is visible (not deleted).
    pub visible: bool,
    /// Changeset this revision belongs to.
    pub changeset_id: ChangesetId,
    /// Author's user id.
    pub user_id: UserId,
    /// Author's user name.
    pub user: String,
    /// Time the revision was accepted into its changeset, distinct from the
    /// authoring time. `None` when not yet committed or unknown.
    pub committed: Option<Timestamp>,
}
