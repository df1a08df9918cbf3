// goal.rs — The Goal record as it travels over the wire.

use serde::{Deserialize, Serialize};

/// A goal record.
///
/// The remote store assigns `id` at creation time; it never changes
/// afterwards. `text` is the only user-supplied field — there is no
/// update-in-place operation, so a goal's text is fixed once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, assigned by the remote store.
    pub id: i64,

    /// Free-text description of the goal.
    pub text: String,
}
