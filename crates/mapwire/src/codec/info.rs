//! Revision metadata encode/decode and changeset substitution.

use crate::codec::strings::{StringTable, lookup};
use crate::codec::time;
use crate::error::DecodeError;
use crate::model::{Changeset, Info};
use crate::wire;

/// Encodes revision metadata.
///
/// Changeset id, user id, and user name are embedded only when
/// `include_changeset` is set, the mode used for entities that are not
/// part of a changeset-substitution context.
pub(crate) fn encode_info(
    info: &Info,
    table: &mut StringTable,
    include_changeset: bool,
) -> wire::Info {
    let mut encoded = wire::Info {
        version: info.version,
        timestamp: time::to_unix(info.timestamp),
        visible: Some(info.visible),
        committed: time::to_unix_opt(info.committed),
        ..wire::Info::default()
    };

    if include_changeset {
        encoded.changeset_id = info.changeset_id;
        encoded.user_id = info.user_id;
        encoded.user_sid = table.add(&info.user);
    }

    encoded
}

/// Decodes revision metadata, resolving the user name through the table.
pub(crate) fn decode_info(encoded: &wire::Info, table: &[String]) -> Result<Info, DecodeError> {
    Ok(Info {
        version: encoded.version,
        timestamp: time::from_unix(encoded.timestamp),
        visible: encoded.visible.unwrap_or(false),
        changeset_id: encoded.changeset_id,
        user_id: encoded.user_id,
        user: lookup(table, encoded.user_sid as usize, "user name")?.to_string(),
        committed: time::from_unix_opt(encoded.committed),
    })
}

/// Overrides decoded changeset identity with the substitution context, when
/// one is supplied.
pub(crate) fn apply_changeset(info: &mut Info, changeset: Option<&Changeset>) {
    if let Some(cs) = changeset {
        info.changeset_id = cs.id;
        info.user_id = cs.user_id;
        info.user = cs.user.clone();
    }
}
