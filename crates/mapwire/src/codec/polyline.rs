//! Single-polyline encode/decode.

use crate::codec::delta;
use crate::codec::info::{apply_changeset, decode_info, encode_info};
use crate::codec::members::{decode_node_snapshots, encode_node_snapshots};
use crate::codec::strings::StringTable;
use crate::codec::tags::{decode_tags, encode_tags};
use crate::error::DecodeError;
use crate::model::{Changeset, Polyline, PolylineNode};
use crate::wire;

/// Encodes one polyline. Node references travel delta-encoded; when the
/// first reference carries a historical version, a snapshot block for the
/// whole sequence is emitted alongside.
///
/// The first-reference check is a best-effort heuristic fixed by the wire
/// contract: a sequence where only a later reference is historical loses
/// that snapshot data.
pub fn encode_polyline(
    polyline: &Polyline,
    table: &mut StringTable,
    include_changeset: bool,
) -> wire::Polyline {
    let (keys, vals) = encode_tags(&polyline.tags, table);
    let mut encoded = wire::Polyline {
        id: polyline.id,
        keys,
        vals,
        info: Some(encode_info(&polyline.info, table, include_changeset)),
        updates: polyline.updates.clone(),
        ..wire::Polyline::default()
    };

    if !polyline.nodes.is_empty() {
        encoded.refs = delta::encode_i64(polyline.nodes.iter().map(|n| n.id).collect());
        if polyline.nodes[0].version != 0 {
            encoded.dense_members = Some(encode_node_snapshots(&polyline.nodes));
        }
    }

    encoded
}

/// Decodes one polyline against the supplied string table.
pub fn decode_polyline(
    encoded: wire::Polyline,
    table: &[String],
    changeset: Option<&Changeset>,
) -> Result<Polyline, DecodeError> {
    let tags = decode_tags(&encoded.keys, &encoded.vals, table)?;
    let mut info = decode_info(&encoded.info.unwrap_or_default(), table)?;

    let mut nodes: Vec<PolylineNode> = delta::decode_i64(encoded.refs)
        .into_iter()
        .map(PolylineNode::new)
        .collect();
    decode_node_snapshots(&mut nodes, encoded.dense_members)?;

    apply_changeset(&mut info, changeset);

    Ok(Polyline {
        id: encoded.id,
        nodes,
        info,
        tags,
        updates: encoded.updates,
    })
}
