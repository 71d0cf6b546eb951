//! Relation membership columns and per-member historical snapshots.
//!
//! The primary member sequence travels as three parallel columns (role
//! index, delta-encoded reference, member kind). Historical snapshots, when
//! present, travel as a separate columnar block aligned 1:1 with the
//! primary sequence by position.

use crate::codec::check_column;
use crate::codec::delta;
use crate::codec::geo;
use crate::codec::strings::{StringTable, lookup};
use crate::error::DecodeError;
use crate::model::{Member, MemberKind, PolylineNode};
use crate::wire;

/// Encodes the primary member columns: role indexes, delta-encoded
/// references, and kind values.
pub(crate) fn encode_members(
    members: &[Member],
    table: &mut StringTable,
) -> (Vec<u32>, Vec<i64>, Vec<i32>) {
    let mut roles = Vec::with_capacity(members.len());
    let mut refs = Vec::with_capacity(members.len());
    let mut types = Vec::with_capacity(members.len());

    for member in members {
        roles.push(table.add(&member.role));
        refs.push(member.element);
        types.push(member.kind.to_wire());
    }

    (roles, delta::encode_i64(refs), types)
}

/// Decodes the primary member columns. Members come back without
/// historical snapshots; [`decode_member_snapshots`] fills those in when an
/// auxiliary block is present.
pub(crate) fn decode_members(
    roles: Vec<u32>,
    refs: Vec<i64>,
    types: Vec<i32>,
    table: &[String],
) -> Result<Vec<Member>, DecodeError> {
    check_column("member refs", roles.len(), refs.len())?;
    check_column("member types", roles.len(), types.len())?;

    let refs = delta::decode_i64(refs);
    let mut members = Vec::with_capacity(roles.len());
    for i in 0..roles.len() {
        let kind = MemberKind::from_wire(types[i])
            .ok_or(DecodeError::InvalidMemberType { value: types[i] })?;
        members.push(Member::new(
            kind,
            refs[i],
            lookup(table, roles[i] as usize, "member role")?,
        ));
    }
    Ok(members)
}

/// Encodes historical snapshots for polyline node references. Coordinates
/// are always carried, node references being points by definition.
pub(crate) fn encode_node_snapshots(nodes: &[PolylineNode]) -> wire::DenseMembers {
    let mut versions = Vec::with_capacity(nodes.len());
    let mut changeset_ids = Vec::with_capacity(nodes.len());
    let mut lats = Vec::with_capacity(nodes.len());
    let mut lons = Vec::with_capacity(nodes.len());

    for node in nodes {
        versions.push(node.version);
        changeset_ids.push(node.changeset_id);
        lats.push(geo::to_fixed(node.lat));
        lons.push(geo::to_fixed(node.lon));
    }

    wire::DenseMembers {
        versions,
        changeset_ids: delta::encode_i64(changeset_ids),
        lats: delta::encode_i64(lats),
        lons: delta::encode_i64(lons),
    }
}

/// Applies a snapshot block to decoded polyline node references. Absence
/// means no snapshot data was recorded for this polyline version.
pub(crate) fn decode_node_snapshots(
    nodes: &mut [PolylineNode],
    encoded: Option<wire::DenseMembers>,
) -> Result<(), DecodeError> {
    let Some(encoded) = encoded else {
        return Ok(());
    };
    if encoded.versions.is_empty() {
        return Ok(());
    }

    check_column("node snapshot versions", nodes.len(), encoded.versions.len())?;
    check_column("node snapshot changesets", nodes.len(), encoded.changeset_ids.len())?;
    check_column("node snapshot latitudes", nodes.len(), encoded.lats.len())?;
    check_column("node snapshot longitudes", nodes.len(), encoded.lons.len())?;

    let changeset_ids = delta::decode_i64(encoded.changeset_ids);
    let lats = delta::decode_i64(encoded.lats);
    let lons = delta::decode_i64(encoded.lons);

    for (i, node) in nodes.iter_mut().enumerate() {
        node.version = encoded.versions[i];
        node.changeset_id = changeset_ids[i];
        node.lat = geo::from_fixed(lats[i]);
        node.lon = geo::from_fixed(lons[i]);
    }
    Ok(())
}

/// Encodes historical snapshots for relation members. Coordinate columns
/// are carried only when at least one member is point-kind; polylines and
/// relations have no single coordinate to snapshot.
pub(crate) fn encode_member_snapshots(members: &[Member]) -> wire::DenseMembers {
    let mut versions = Vec::with_capacity(members.len());
    let mut changeset_ids = Vec::with_capacity(members.len());
    let mut lats = Vec::with_capacity(members.len());
    let mut lons = Vec::with_capacity(members.len());

    let mut points = 0;
    for member in members {
        if member.kind == MemberKind::Point {
            points += 1;
        }
        versions.push(member.version);
        changeset_ids.push(member.changeset_id);
        lats.push(geo::to_fixed(member.lat));
        lons.push(geo::to_fixed(member.lon));
    }

    let mut encoded = wire::DenseMembers {
        versions,
        changeset_ids: delta::encode_i64(changeset_ids),
        ..wire::DenseMembers::default()
    };

    if points > 0 {
        encoded.lats = delta::encode_i64(lats);
        encoded.lons = delta::encode_i64(lons);
    }

    encoded
}

/// Applies a snapshot block to decoded relation members. A missing block,
/// or one with no versions, means no snapshot data is available.
pub(crate) fn decode_member_snapshots(
    members: &mut [Member],
    encoded: Option<wire::DenseMembers>,
) -> Result<(), DecodeError> {
    let Some(encoded) = encoded else {
        return Ok(());
    };
    if encoded.versions.is_empty() {
        return Ok(());
    }

    check_column("member snapshot versions", members.len(), encoded.versions.len())?;
    check_column("member snapshot changesets", members.len(), encoded.changeset_ids.len())?;
    let has_coordinates = !encoded.lats.is_empty() || !encoded.lons.is_empty();
    if has_coordinates {
        check_column("member snapshot latitudes", members.len(), encoded.lats.len())?;
        check_column("member snapshot longitudes", members.len(), encoded.lons.len())?;
    }

    let changeset_ids = delta::decode_i64(encoded.changeset_ids);
    let lats = delta::decode_i64(encoded.lats);
    let lons = delta::decode_i64(encoded.lons);

    for (i, member) in members.iter_mut().enumerate() {
        member.version = encoded.versions[i];
        member.changeset_id = changeset_ids[i];
        if has_coordinates {
            member.lat = geo::from_fixed(lats[i]);
            member.lon = geo::from_fixed(lons[i]);
        }
    }
    Ok(())
}
