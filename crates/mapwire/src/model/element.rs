//! Map entities: points, polylines, and relations.

use crate::model::{ChangesetId, ElementRef, Info, PointId, PolylineId, RelationId, Tags, Timestamp};

/// A single geolocated entity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    pub id: PointId,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    pub info: Info,
    pub tags: Tags,
}

impl Point {
    /// Creates a point at the given coordinates with default revision
    /// metadata and no tags.
    pub fn new(id: PointId, lat: f64, lon: f64) -> Self {
        Self {
            id,
            lat,
            lon,
            info: Info::default(),
            tags: Tags::new(),
        }
    }
}

/// A reference to a point within a polyline, optionally carrying a
/// historical snapshot of that point at the time the polyline version was
/// made. A zero `version` means no snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolylineNode {
    pub id: PointId,
    pub version: i32,
    pub changeset_id: ChangesetId,
    pub lat: f64,
    pub lon: f64,
}

impl PolylineNode {
    /// Creates a bare reference with no historical snapshot.
    pub fn new(id: PointId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// An ordered path of point references.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub id: PolylineId,
    pub nodes: Vec<PolylineNode>,
    pub info: Info,
    pub tags: Tags,
    /// Alternate historical member snapshots, passed through the wire
    /// unchanged.
    pub updates: Vec<Update>,
}

impl Polyline {
    /// Creates an empty polyline with default revision metadata.
    pub fn new(id: PolylineId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// The kind of entity a relation member references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Point,
    Polyline,
    Relation,
}

impl MemberKind {
    /// Returns the fixed wire value for this kind.
    pub fn to_wire(self) -> i32 {
        match self {
            MemberKind::Point => crate::wire::MEMBER_TYPE_POINT,
            MemberKind::Polyline => crate::wire::MEMBER_TYPE_POLYLINE,
            MemberKind::Relation => crate::wire::MEMBER_TYPE_RELATION,
        }
    }

    /// Creates a kind from its wire value; `None` for values outside the
    /// fixed enum.
    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            crate::wire::MEMBER_TYPE_POINT => Some(MemberKind::Point),
            crate::wire::MEMBER_TYPE_POLYLINE => Some(MemberKind::Polyline),
            crate::wire::MEMBER_TYPE_RELATION => Some(MemberKind::Relation),
            _ => None,
        }
    }
}

/// One member of a relation: a referenced entity, its kind, and the role it
/// plays. Version, changeset, and coordinates form the optional historical
/// snapshot; a zero `version` means no snapshot, and coordinates are only
/// meaningful for point-kind members.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub kind: MemberKind,
    pub element: ElementRef,
    pub role: String,
    pub version: i32,
    pub changeset_id: ChangesetId,
    pub lat: f64,
    pub lon: f64,
}

impl Member {
    /// Creates a member with no historical snapshot.
    pub fn new(kind: MemberKind, element: ElementRef, role: impl Into<String>) -> Self {
        Self {
            kind,
            element,
            role: role.into(),
            version: 0,
            changeset_id: 0,
            lat: 0.0,
            lon: 0.0,
        }
    }
}

/// A named group of mixed members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Relation {
    pub id: RelationId,
    pub members: Vec<Member>,
    pub info: Info,
    pub tags: Tags,
    /// Alternate historical member snapshots, passed through the wire
    /// unchanged.
    pub updates: Vec<Update>,
}

impl Relation {
    /// Creates an empty relation with default revision metadata.
    pub fn new(id: RelationId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// An alternate or conflicting historical snapshot of a member, recorded
/// against the member's position in the containing entity.
///
/// The codec copies these through both directions without interpreting
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Update {
    /// Position of the member this update applies to.
    pub index: usize,
    pub version: i32,
    pub timestamp: Option<Timestamp>,
    pub changeset_id: ChangesetId,
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_kind_wire_roundtrip() {
        for kind in [MemberKind::Point, MemberKind::Polyline, MemberKind::Relation] {
            assert_eq!(MemberKind::from_wire(kind.to_wire()), Some(kind));
        }
    }

    #[test]
    fn test_member_kind_unknown_wire_value() {
        assert_eq!(MemberKind::from_wire(3), None);
        assert_eq!(MemberKind::from_wire(-1), None);
    }

    #[test]
    fn test_polyline_node_bare_reference() {
        let node = PolylineNode::new(42);
        assert_eq!(node.id, 42);
        assert_eq!(node.version, 0);
        assert_eq!(node.lat, 0.0);
    }
}
