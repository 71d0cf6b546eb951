//! mapwire: delta-compressed binary marshaling for map entities.
//!
//! This crate converts in-memory geospatial entities (points, polylines,
//! and grouped relations with tagged attributes and revision metadata) to
//! and from the compact, delta-compressed, string-table-backed wire
//! representation used for bulk map-data interchange and changeset
//! snapshots.
//!
//! # Overview
//!
//! The wire format leans on a few interacting compression tricks, and the
//! engine here is their single source of truth:
//! - **Delta coding**: integer columns (identities, coordinates,
//!   timestamps) are stored as successive differences ([`codec::delta`]).
//! - **String interning**: tag keys/values, roles, and user names collapse
//!   into one shared [`StringTable`] per block.
//! - **Fixed-point coordinates**: degrees quantized at 1e7 units per
//!   degree with round-half-away-from-zero ([`codec::geo`]).
//! - **Sentinel optionals**: timestamps at or before the epoch collapse to
//!   an "unset" sentinel on the wire ([`codec::time`]).
//!
//! Serialization of the wire message structs themselves, block framing,
//! and compression belong to the container layer; this crate populates
//! [`wire`] messages on encode and consumes them on decode.
//!
//! # Quick Start
//!
//! ```rust
//! use mapwire::{Point, StringTable, Tag, decode_point, encode_point};
//!
//! let mut point = Point::new(1, 51.5074, -0.1278);
//! point.info.version = 3;
//! point.info.visible = true;
//! point.tags.push(Tag::new("amenity", "cafe"));
//!
//! // One table is shared by every entity encoded into a block.
//! let mut table = StringTable::new();
//! let encoded = encode_point(&point, &mut table, true);
//!
//! // The container ships the table alongside the entities; decode
//! // resolves indexes against it.
//! let strings = table.into_strings();
//! let decoded = decode_point(encoded, &strings, None).unwrap();
//! assert_eq!(decoded.id, 1);
//! assert_eq!(decoded.tags.find("amenity"), Some("cafe"));
//! ```
//!
//! # Modules
//!
//! - [`model`]: entity types (Point, Polyline, Relation, Info, Tags)
//! - [`wire`]: the fixed wire message shapes
//! - [`codec`]: the marshaling engine and its primitives
//! - [`error`]: decode error types

pub mod codec;
pub mod error;
pub mod model;
pub mod wire;

// Re-export commonly used types at crate root
pub use codec::{
    StringTable, decode_point, decode_points, decode_polyline, decode_relation, encode_point,
    encode_points, encode_polyline, encode_relation,
};
pub use error::DecodeError;
pub use model::{
    Changeset, ChangesetId, ElementRef, Info, Member, MemberKind, Point, PointId, Polyline,
    PolylineId, PolylineNode, Relation, RelationId, Tag, Tags, Timestamp, Update, UserId,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
