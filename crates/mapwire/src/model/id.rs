//! Typed identifiers for map entities.
//!
//! Identities are plain integers fixed by the wire contract; the aliases
//! keep signatures honest about which kind of id they carry.

/// Identifier of a point.
pub type PointId = i64;

/// Identifier of a polyline.
pub type PolylineId = i64;

/// Identifier of a relation.
pub type RelationId = i64;

/// Identifier of the user who authored a revision.
pub type UserId = i32;

/// Identifier of the changeset a revision belongs to.
pub type ChangesetId = i64;

/// Identity referenced by a relation member; interpreted per the member's
/// [`crate::model::MemberKind`].
pub type ElementRef = i64;
