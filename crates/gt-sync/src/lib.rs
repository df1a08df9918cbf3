//! # gt-sync
//!
//! Local goal list synchronization against the remote store.
//!
//! The [`Synchronizer`] owns the authoritative local view of the goal
//! collection and orchestrates the remote calls behind the three intents a
//! presentation layer needs: load, add, delete. Local state changes only on
//! confirmed remote success — there is no optimistic mutation, so a failed
//! call leaves the list exactly as it was.
//!
//! ## Key components
//!
//! - [`SyncState`] — snapshot of the observable state: goal list + status
//! - [`SyncStatus`] — `Idle`, `Loading`, or `Error(message)`
//! - [`Synchronizer`] — the orchestrator; publishes snapshots through a
//!   `tokio::sync::watch` channel so any number of observers can bind to it

pub mod state;
pub mod synchronizer;

pub use state::{SyncState, SyncStatus};
pub use synchronizer::Synchronizer;
