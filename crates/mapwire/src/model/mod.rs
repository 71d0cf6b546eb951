//! In-memory data model for map entities.
//!
//! This module contains the entity types the codec operates on:
//! - Identifiers (typed integer aliases)
//! - Points, polylines, and relations with their tag sets
//! - Revision metadata ([`Info`], [`Timestamp`])
//! - The changeset substitution context

pub mod changeset;
pub mod element;
pub mod id;
pub mod info;
pub mod tags;

pub use changeset::Changeset;
pub use element::{Member, MemberKind, Point, Polyline, PolylineNode, Relation, Update};
pub use id::{ChangesetId, ElementRef, PointId, PolylineId, RelationId, UserId};
pub use info::{Info, Timestamp};
pub use tags::{Tag, Tags};
