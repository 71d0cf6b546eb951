//! Fixed wire message shapes.
//!
//! These structs mirror an externally fixed binary schema: the codec
//! populates them on encode and consumes them on decode, while their
//! byte-level serialization and block compression belong to the container
//! layer. Field meanings and numeric conventions here are part of the wire
//! contract and must not change:
//!
//! - coordinates are fixed-point at [`crate::codec::geo::GEO_SCALE`] units
//!   per degree,
//! - integer columns are stored delta-encoded ([`crate::codec::delta`]),
//! - string-valued fields are indexes into the block's string table, with
//!   index 0 reserved,
//! - member types use the fixed values of [`MEMBER_TYPE_POINT`],
//!   [`MEMBER_TYPE_POLYLINE`], [`MEMBER_TYPE_RELATION`].
//!
//! Optional scalar fields are `Option`; absent repeated fields are empty
//! vectors.

use crate::model::Update;

/// Wire value for a point-kind relation member.
pub const MEMBER_TYPE_POINT: i32 = 0;
/// Wire value for a polyline-kind relation member.
pub const MEMBER_TYPE_POLYLINE: i32 = 1;
/// Wire value for a relation-kind relation member.
pub const MEMBER_TYPE_RELATION: i32 = 2;

/// Revision metadata attached to a single encoded entity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Info {
    pub version: i32,
    /// Epoch seconds; `0` means unset.
    pub timestamp: i64,
    pub changeset_id: i64,
    pub user_id: i32,
    /// String-table index of the user name; `0` when not embedded.
    pub user_sid: u32,
    pub visible: Option<bool>,
    /// Epoch seconds; absent when the revision has no commit time.
    pub committed: Option<i64>,
}

/// A single encoded point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    pub id: i64,
    /// Tag key indexes, parallel to `vals`.
    pub keys: Vec<u32>,
    /// Tag value indexes, parallel to `keys`.
    pub vals: Vec<u32>,
    pub info: Option<Info>,
    /// Fixed-point latitude.
    pub lat: i64,
    /// Fixed-point longitude.
    pub lon: i64,
}

/// Columnar revision metadata for a dense point block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DenseInfo {
    pub versions: Vec<i32>,
    /// Delta-encoded epoch seconds.
    pub timestamps: Vec<i64>,
    /// Delta-encoded epoch seconds; empty when no point in the block has a
    /// commit time.
    pub committeds: Vec<i64>,
    /// Delta-encoded; empty unless changeset data is embedded.
    pub changeset_ids: Vec<i64>,
    /// Delta-encoded; empty unless changeset data is embedded.
    pub user_ids: Vec<i32>,
    /// Plain string-table indexes; empty unless changeset data is embedded.
    pub user_sids: Vec<u32>,
    pub visibles: Vec<bool>,
}

/// A batch of points encoded as parallel columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DensePoints {
    /// Delta-encoded identities.
    pub ids: Vec<i64>,
    pub info: Option<DenseInfo>,
    /// Delta-encoded fixed-point latitudes.
    pub lats: Vec<i64>,
    /// Delta-encoded fixed-point longitudes.
    pub lons: Vec<i64>,
    /// Flat tag runs: per point, (key, value) index pairs then a `0`
    /// terminator. Empty when no point in the block carries tags.
    pub keys_vals: Vec<u32>,
}

/// Columnar historical snapshots aligned 1:1 with a primary member or
/// node-reference sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DenseMembers {
    pub versions: Vec<i32>,
    /// Delta-encoded.
    pub changeset_ids: Vec<i64>,
    /// Delta-encoded fixed-point; empty when no member carries coordinates.
    pub lats: Vec<i64>,
    /// Delta-encoded fixed-point; empty when no member carries coordinates.
    pub lons: Vec<i64>,
}

/// A single encoded polyline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub id: i64,
    pub keys: Vec<u32>,
    pub vals: Vec<u32>,
    pub info: Option<Info>,
    /// Delta-encoded node-reference identities.
    pub refs: Vec<i64>,
    pub dense_members: Option<DenseMembers>,
    /// Opaque pass-through; not interpreted by this crate.
    pub updates: Vec<Update>,
}

/// A single encoded relation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Relation {
    pub id: i64,
    pub keys: Vec<u32>,
    pub vals: Vec<u32>,
    pub info: Option<Info>,
    /// Role string-table indexes, parallel to `refs` and `types`.
    pub roles: Vec<u32>,
    /// Delta-encoded member references, parallel to `roles` and `types`.
    pub refs: Vec<i64>,
    /// Member type values, parallel to `roles` and `refs`.
    pub types: Vec<i32>,
    pub dense_members: Option<DenseMembers>,
    /// Opaque pass-through; not interpreted by this crate.
    pub updates: Vec<Update>,
}
