//! Changeset substitution context.

use crate::model::{ChangesetId, UserId};

/// Shared changeset identity for a block of entities.
///
/// Entities encoded as part of a changeset omit their per-entity changeset
/// id, user id, and user name; supplying this context at decode time
/// substitutes the shared values back, overriding whatever was encoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Changeset {
    pub id: ChangesetId,
    pub user_id: UserId,
    pub user: String,
}

impl Changeset {
    /// Creates a substitution context.
    pub fn new(id: ChangesetId, user_id: UserId, user: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            user: user.into(),
        }
    }
}
