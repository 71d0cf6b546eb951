//! Single-point encode/decode.

use crate::codec::geo;
use crate::codec::info::{apply_changeset, decode_info, encode_info};
use crate::codec::strings::StringTable;
use crate::codec::tags::{decode_tags, encode_tags};
use crate::error::DecodeError;
use crate::model::{Changeset, Point};
use crate::wire;

/// Encodes one point, interning its tag strings (and user name, when
/// `include_changeset` is set) into the shared table.
pub fn encode_point(
    point: &Point,
    table: &mut StringTable,
    include_changeset: bool,
) -> wire::Point {
    let (keys, vals) = encode_tags(&point.tags, table);
    wire::Point {
        id: point.id,
        keys,
        vals,
        info: Some(encode_info(&point.info, table, include_changeset)),
        lat: geo::to_fixed(point.lat),
        lon: geo::to_fixed(point.lon),
    }
}

/// Decodes one point against the supplied string table. A substitution
/// context, when given, overrides the decoded changeset identity.
pub fn decode_point(
    encoded: wire::Point,
    table: &[String],
    changeset: Option<&Changeset>,
) -> Result<Point, DecodeError> {
    let tags = decode_tags(&encoded.keys, &encoded.vals, table)?;
    let mut info = decode_info(&encoded.info.unwrap_or_default(), table)?;
    apply_changeset(&mut info, changeset);

    Ok(Point {
        id: encoded.id,
        lat: geo::from_fixed(encoded.lat),
        lon: geo::from_fixed(encoded.lon),
        info,
        tags,
    })
}
