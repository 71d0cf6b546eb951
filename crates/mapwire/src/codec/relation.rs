//! Single-relation encode/decode.

use crate::codec::info::{apply_changeset, decode_info, encode_info};
use crate::codec::members::{
    decode_member_snapshots, decode_members, encode_member_snapshots, encode_members,
};
use crate::codec::strings::StringTable;
use crate::codec::tags::{decode_tags, encode_tags};
use crate::error::DecodeError;
use crate::model::{Changeset, Relation};
use crate::wire;

/// Encodes one relation. Members travel as three parallel columns; when
/// the first member carries a historical version, a snapshot block for the
/// whole sequence is emitted alongside.
///
/// As with polyline node references, the first-member check is a
/// best-effort heuristic fixed by the wire contract.
pub fn encode_relation(
    relation: &Relation,
    table: &mut StringTable,
    include_changeset: bool,
) -> wire::Relation {
    let (roles, refs, types) = encode_members(&relation.members, table);
    let (keys, vals) = encode_tags(&relation.tags, table);

    let mut encoded = wire::Relation {
        id: relation.id,
        keys,
        vals,
        info: Some(encode_info(&relation.info, table, include_changeset)),
        roles,
        refs,
        types,
        updates: relation.updates.clone(),
        ..wire::Relation::default()
    };

    if relation.members.first().is_some_and(|m| m.version != 0) {
        encoded.dense_members = Some(encode_member_snapshots(&relation.members));
    }

    encoded
}

/// Decodes one relation against the supplied string table.
pub fn decode_relation(
    encoded: wire::Relation,
    table: &[String],
    changeset: Option<&Changeset>,
) -> Result<Relation, DecodeError> {
    let tags = decode_tags(&encoded.keys, &encoded.vals, table)?;
    let mut info = decode_info(&encoded.info.unwrap_or_default(), table)?;

    let mut members = decode_members(encoded.roles, encoded.refs, encoded.types, table)?;
    decode_member_snapshots(&mut members, encoded.dense_members)?;

    apply_changeset(&mut info, changeset);

    Ok(Relation {
        id: encoded.id,
        members,
        info,
        tags,
        updates: encoded.updates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, MemberKind, Tag, Timestamp};

    fn bus_route() -> Relation {
        let mut relation = Relation::new(900);
        relation.info.version = 1;
        relation.info.visible = true;
        relation.info.timestamp = Some(Timestamp::from_unix(1_419_881_846));
        relation.tags.push(Tag::new("type", "route"));
        relation.members = vec![
            Member::new(MemberKind::Point, 1001, "stop"),
            Member::new(MemberKind::Polyline, 200, "route"),
        ];
        relation
    }

    #[test]
    fn test_roundtrip_without_snapshots() {
        let relation = bus_route();
        let mut table = StringTable::new();
        let encoded = encode_relation(&relation, &mut table, false);
        assert!(encoded.dense_members.is_none());

        let strings = table.into_strings();
        let decoded = decode_relation(encoded, &strings, None).unwrap();
        assert_eq!(decoded, relation);

        // no auxiliary block: snapshot fields stay zero-valued
        for member in &decoded.members {
            assert_eq!(member.version, 0);
            assert_eq!(member.changeset_id, 0);
            assert_eq!(member.lat, 0.0);
            assert_eq!(member.lon, 0.0);
        }
    }

    #[test]
    fn test_roundtrip_with_snapshots() {
        let mut relation = bus_route();
        relation.members[0].version = 3;
        relation.members[0].changeset_id = 52;
        relation.members[0].lat = 51.5074;
        relation.members[0].lon = -0.1278;
        relation.members[1].version = 2;
        relation.members[1].changeset_id = 53;

        let mut table = StringTable::new();
        let encoded = encode_relation(&relation, &mut table, false);
        assert!(encoded.dense_members.is_some());

        let strings = table.into_strings();
        let decoded = decode_relation(encoded, &strings, None).unwrap();

        assert_eq!(decoded.members[0].version, 3);
        assert_eq!(decoded.members[0].changeset_id, 52);
        assert!((decoded.members[0].lat - 51.5074).abs() <= 5e-8);
        assert!((decoded.members[0].lon - -0.1278).abs() <= 5e-8);
        assert_eq!(decoded.members[1].version, 2);
        assert_eq!(decoded.members[1].changeset_id, 53);
    }

    #[test]
    fn test_roles_shared_through_table() {
        let mut relation = bus_route();
        relation.members.push(Member::new(MemberKind::Point, 1002, "stop"));

        let mut table = StringTable::new();
        let encoded = encode_relation(&relation, &mut table, false);
        assert_eq!(encoded.roles[0], encoded.roles[2]);

        let strings = table.into_strings();
        let decoded = decode_relation(encoded, &strings, None).unwrap();
        assert_eq!(decoded.members[2].role, "stop");
    }

    #[test]
    fn test_unknown_member_type_rejected() {
        let relation = bus_route();
        let mut table = StringTable::new();
        let mut encoded = encode_relation(&relation, &mut table, false);
        encoded.types[1] = 7;

        let strings = table.into_strings();
        let err = decode_relation(encoded, &strings, None).unwrap_err();
        assert_eq!(err, DecodeError::InvalidMemberType { value: 7 });
    }

    #[test]
    fn test_role_index_out_of_bounds() {
        let relation = bus_route();
        let mut table = StringTable::new();
        let encoded = encode_relation(&relation, &mut table, false);

        // table too short for the interned roles
        let strings = vec![String::new()];
        let err = decode_relation(encoded, &strings, None).unwrap_err();
        assert!(matches!(err, DecodeError::IndexOutOfBounds { .. }));
    }

    #[test]
    fn test_empty_relation() {
        let relation = Relation::new(77);
        let mut table = StringTable::new();
        let encoded = encode_relation(&relation, &mut table, false);

        let strings = table.into_strings();
        let decoded = decode_relation(encoded, &strings, None).unwrap();
        assert!(decoded.members.is_empty());
    }

    #[test]
    fn test_changeset_substitution() {
        let relation = bus_route();
        let mut table = StringTable::new();
        let encoded = encode_relation(&relation, &mut table, true);

        let strings = table.into_strings();
        let cs = Changeset::new(42, 3, "editor");
        let decoded = decode_relation(encoded, &strings, Some(&cs)).unwrap();
        assert_eq!(decoded.info.changeset_id, 42);
        assert_eq!(decoded.info.user_id, 3);
        assert_eq!(decoded.info.user, "editor");
    }
}
