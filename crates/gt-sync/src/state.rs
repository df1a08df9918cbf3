// state.rs — The observable synchronizer state.

use gt_client::Goal;

/// Where the synchronizer currently stands.
///
/// One derived status covers all three operations — the UI never needs to
/// know *which* call is in flight, only that one is, or that the last one
/// failed and with what message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SyncStatus {
    /// No operation in flight, last operation (if any) succeeded.
    #[default]
    Idle,

    /// An operation is in flight.
    Loading,

    /// The last operation failed; carries the display message.
    Error(String),
}

/// A snapshot of everything a presentation layer can observe.
///
/// Snapshots are cheap to clone and flow through a watch channel; observers
/// never see a half-applied transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncState {
    /// The local mirror of the remote collection, in display order.
    pub goals: Vec<Goal>,

    /// Current derived status.
    pub status: SyncStatus,
}

impl SyncState {
    /// The current error message, if the last operation failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SyncStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// True while an operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == SyncStatus::Loading
    }
}
