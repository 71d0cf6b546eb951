//! Columnar encode/decode for batches of points.
//!
//! Bulk transfer encodes many points as parallel per-field columns instead
//! of repeated records: identities, coordinates, and timestamps
//! delta-encode well, and tag strings collapse into one flat run-length
//! column over the shared table.

use crate::codec::check_column;
use crate::codec::delta;
use crate::codec::geo;
use crate::codec::info::apply_changeset;
use crate::codec::strings::{StringTable, lookup};
use crate::codec::time;
use crate::error::DecodeError;
use crate::model::{Changeset, Point, Tag, Tags};
use crate::wire;

/// Encodes a batch of points into parallel columns.
///
/// The committed column is carried only when at least one point has a
/// commit time; the tag column only when at least one point has tags.
/// Changeset identity columns are embedded only with `include_changeset`.
pub fn encode_points(
    points: &[Point],
    table: &mut StringTable,
    include_changeset: bool,
) -> wire::DensePoints {
    let len = points.len();
    let mut ids = Vec::with_capacity(len);
    let mut lats = Vec::with_capacity(len);
    let mut lons = Vec::with_capacity(len);
    let mut versions = Vec::with_capacity(len);
    let mut visibles = Vec::with_capacity(len);
    let mut timestamps = Vec::with_capacity(len);
    let mut committeds = Vec::with_capacity(len);

    let mut tag_count = 0;
    let mut committed_count = 0;
    for point in points {
        ids.push(point.id);
        lats.push(geo::to_fixed(point.lat));
        lons.push(geo::to_fixed(point.lon));
        versions.push(point.info.version);
        visibles.push(point.info.visible);
        timestamps.push(time::to_unix(point.info.timestamp));
        // zero keeps the column aligned for points without a commit time
        committeds.push(time::to_unix(point.info.committed));
        if point.info.committed.is_some() {
            committed_count += 1;
        }
        tag_count += point.tags.len();
    }

    let mut dense_info = wire::DenseInfo {
        versions,
        timestamps: delta::encode_i64(timestamps),
        visibles,
        ..wire::DenseInfo::default()
    };
    if committed_count > 0 {
        dense_info.committeds = delta::encode_i64(committeds);
    }
    if include_changeset {
        let (changeset_ids, user_ids, user_sids) = changeset_columns(points, table);
        dense_info.changeset_ids = delta::encode_i64(changeset_ids);
        dense_info.user_ids = delta::encode_i32(user_ids);
        dense_info.user_sids = user_sids;
    }

    let mut encoded = wire::DensePoints {
        ids: delta::encode_i64(ids),
        info: Some(dense_info),
        lats: delta::encode_i64(lats),
        lons: delta::encode_i64(lons),
        ..wire::DensePoints::default()
    };
    if tag_count > 0 {
        encoded.keys_vals = tag_runs(points, table, tag_count);
    }

    encoded
}

/// Flattens every point's tags into one index column: (key, value) pairs
/// per point, each point closed by a `0` terminator. A point without tags
/// contributes the terminator alone.
fn tag_runs(points: &[Point], table: &mut StringTable, tag_count: usize) -> Vec<u32> {
    let mut runs = Vec::with_capacity(2 * tag_count + points.len());
    for point in points {
        for tag in &point.tags {
            runs.push(table.add(&tag.key));
            runs.push(table.add(&tag.value));
        }
        runs.push(0);
    }
    runs
}

fn changeset_columns(
    points: &[Point],
    table: &mut StringTable,
) -> (Vec<i64>, Vec<i32>, Vec<u32>) {
    let mut changeset_ids = Vec::with_capacity(points.len());
    let mut user_ids = Vec::with_capacity(points.len());
    let mut user_sids = Vec::with_capacity(points.len());
    for point in points {
        changeset_ids.push(point.info.changeset_id);
        user_ids.push(point.info.user_id);
        user_sids.push(table.add(&point.info.user));
    }
    (changeset_ids, user_ids, user_sids)
}

/// Decodes a dense block back into points, reconstructing each by column
/// position.
pub fn decode_points(
    encoded: wire::DensePoints,
    table: &[String],
    changeset: Option<&Changeset>,
) -> Result<Vec<Point>, DecodeError> {
    let ids = delta::decode_i64(encoded.ids);
    let lats = delta::decode_i64(encoded.lats);
    let lons = delta::decode_i64(encoded.lons);

    let dense_info = encoded.info.unwrap_or_default();
    let versions = dense_info.versions;
    let visibles = dense_info.visibles;
    let timestamps = delta::decode_i64(dense_info.timestamps);
    let committeds = delta::decode_i64(dense_info.committeds);
    let changeset_ids = delta::decode_i64(dense_info.changeset_ids);
    let user_ids = delta::decode_i32(dense_info.user_ids);
    let user_sids = dense_info.user_sids;

    let len = ids.len();
    check_column("latitudes", len, lats.len())?;
    check_column("longitudes", len, lons.len())?;
    check_column("versions", len, versions.len())?;
    check_column("visibles", len, visibles.len())?;
    check_column("timestamps", len, timestamps.len())?;
    check_optional_column("committeds", len, committeds.len())?;
    check_optional_column("changeset ids", len, changeset_ids.len())?;
    check_optional_column("user ids", len, user_ids.len())?;
    check_optional_column("user names", len, user_sids.len())?;

    let mut tag_loc = 0usize;
    let mut points = Vec::with_capacity(len);
    for i in 0..len {
        let mut point = Point::new(ids[i], geo::from_fixed(lats[i]), geo::from_fixed(lons[i]));
        point.info.version = versions[i];
        point.info.visible = visibles[i];
        point.info.timestamp = time::from_unix(timestamps[i]);
        if !committeds.is_empty() {
            point.info.committed = time::from_unix(committeds[i]);
        }

        if changeset.is_some() {
            apply_changeset(&mut point.info, changeset);
        } else {
            if !changeset_ids.is_empty() {
                point.info.changeset_id = changeset_ids[i];
            }
            if !user_ids.is_empty() {
                point.info.user_id = user_ids[i];
            }
            if !user_sids.is_empty() {
                point.info.user = lookup(table, user_sids[i] as usize, "user name")?.to_string();
            }
        }

        if !encoded.keys_vals.is_empty() {
            point.tags = take_tag_run(&encoded.keys_vals, &mut tag_loc, i, table)?;
        }

        points.push(point);
    }

    Ok(points)
}

/// Consumes one point's tag run, advancing the shared cursor past its
/// terminator.
fn take_tag_run(
    keys_vals: &[u32],
    tag_loc: &mut usize,
    position: usize,
    table: &[String],
) -> Result<Tags, DecodeError> {
    let mut tags = Tags::new();
    loop {
        let Some(&key) = keys_vals.get(*tag_loc) else {
            return Err(DecodeError::TruncatedTagRun { position });
        };
        if key == 0 {
            *tag_loc += 1;
            return Ok(tags);
        }
        let Some(&val) = keys_vals.get(*tag_loc + 1) else {
            return Err(DecodeError::TruncatedTagRun { position });
        };
        tags.push(Tag {
            key: lookup(table, key as usize, "tag key")?.to_string(),
            value: lookup(table, val as usize, "tag value")?.to_string(),
        });
        *tag_loc += 2;
    }
}

fn check_optional_column(
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), DecodeError> {
    if actual == 0 {
        return Ok(());
    }
    check_column(field, expected, actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Timestamp;

    fn batch() -> Vec<Point> {
        let mut a = Point::new(1001, 51.5074, -0.1278);
        a.info.version = 1;
        a.info.visible = true;
        a.info.timestamp = Some(Timestamp::from_unix(1_419_881_846));
        a.tags.push(Tag::new("amenity", "cafe"));

        let mut b = Point::new(1002, 51.5075, -0.1279);
        b.info.version = 2;
        b.info.visible = true;
        b.info.timestamp = Some(Timestamp::from_unix(1_419_881_850));

        let mut c = Point::new(1003, 51.5076, -0.1280);
        c.info.version = 1;
        c.info.visible = false;
        c.info.timestamp = Some(Timestamp::from_unix(1_419_881_855));
        c.tags.push(Tag::new("amenity", "bench"));

        vec![a, b, c]
    }

    #[test]
    fn test_mixed_tag_counts_attributed_correctly() {
        let points = batch();
        let mut table = StringTable::new();
        let encoded = encode_points(&points, &mut table, false);

        let strings = table.into_strings();
        let decoded = decode_points(encoded, &strings, None).unwrap();

        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].tags.find("amenity"), Some("cafe"));
        assert!(decoded[1].tags.is_empty());
        assert_eq!(decoded[2].tags.find("amenity"), Some("bench"));
    }

    #[test]
    fn test_columns_roundtrip() {
        let points = batch();
        let mut table = StringTable::new();
        let encoded = encode_points(&points, &mut table, false);

        let strings = table.into_strings();
        let decoded = decode_points(encoded, &strings, None).unwrap();

        for (d, o) in decoded.iter().zip(&points) {
            assert_eq!(d.id, o.id);
            assert_eq!(d.info.version, o.info.version);
            assert_eq!(d.info.visible, o.info.visible);
            assert_eq!(d.info.timestamp, o.info.timestamp);
            assert!((d.lat - o.lat).abs() <= 5e-8);
            assert!((d.lon - o.lon).abs() <= 5e-8);
        }
    }

    #[test]
    fn test_tag_column_absent_for_untagged_batch() {
        let mut points = batch();
        for point in &mut points {
            point.tags = Tags::new();
        }
        let mut table = StringTable::new();
        let encoded = encode_points(&points, &mut table, false);
        assert!(encoded.keys_vals.is_empty());

        let strings = table.into_strings();
        let decoded = decode_points(encoded, &strings, None).unwrap();
        assert!(decoded.iter().all(|p| p.tags.is_empty()));
    }

    #[test]
    fn test_committed_column_only_when_present() {
        let mut points = batch();
        let mut table = StringTable::new();
        let encoded = encode_points(&points, &mut table, false);
        assert!(encoded.info.as_ref().unwrap().committeds.is_empty());

        points[1].info.committed = Some(Timestamp::from_unix(1_419_881_900));
        let encoded = encode_points(&points, &mut StringTable::new(), false);
        let dense_info = encoded.info.as_ref().unwrap();
        assert_eq!(dense_info.committeds.len(), 3);

        let strings = vec![String::new(), "amenity".into(), "cafe".into(), "bench".into()];
        let decoded = decode_points(encoded, &strings, None).unwrap();
        assert!(decoded[0].info.committed.is_none());
        assert_eq!(
            decoded[1].info.committed,
            Some(Timestamp::from_unix(1_419_881_900))
        );
        assert!(decoded[2].info.committed.is_none());
    }

    #[test]
    fn test_changeset_columns_embedded_and_substituted() {
        let mut points = batch();
        points[0].info.changeset_id = 70;
        points[0].info.user_id = 5;
        points[0].info.user = "alice".to_string();
        points[1].info.changeset_id = 70;
        points[1].info.user_id = 5;
        points[1].info.user = "alice".to_string();
        points[2].info.changeset_id = 71;
        points[2].info.user_id = 6;
        points[2].info.user = "bob".to_string();

        let mut table = StringTable::new();
        let encoded = encode_points(&points, &mut table, true);
        let strings = table.into_strings();

        let decoded = decode_points(encoded.clone(), &strings, None).unwrap();
        assert_eq!(decoded[0].info.user, "alice");
        assert_eq!(decoded[2].info.changeset_id, 71);

        // a substitution context wins over the embedded columns
        let cs = Changeset::new(500, 9, "carol");
        let substituted = decode_points(encoded, &strings, Some(&cs)).unwrap();
        assert!(substituted.iter().all(|p| p.info.changeset_id == 500));
        assert!(substituted.iter().all(|p| p.info.user == "carol"));
    }

    #[test]
    fn test_truncated_tag_run_rejected() {
        let points = batch();
        let mut table = StringTable::new();
        let mut encoded = encode_points(&points, &mut table, false);
        // drop the final terminator
        encoded.keys_vals.pop();

        let strings = table.into_strings();
        let err = decode_points(encoded, &strings, None).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedTagRun { position: 2 });
    }

    #[test]
    fn test_ragged_mandatory_column_rejected() {
        let points = batch();
        let mut table = StringTable::new();
        let mut encoded = encode_points(&points, &mut table, false);
        encoded.lats.pop();

        let strings = table.into_strings();
        let err = decode_points(encoded, &strings, None).unwrap_err();
        assert_eq!(
            err,
            DecodeError::LengthMismatch {
                field: "latitudes",
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_empty_batch() {
        let mut table = StringTable::new();
        let encoded = encode_points(&[], &mut table, true);
        let strings = table.into_strings();
        let decoded = decode_points(encoded, &strings, None).unwrap();
        assert!(decoded.is_empty());
    }
}
