// synchronizer.rs — Synchronizer: the single source of truth for the UI.
//
// Orchestrates the three intents (load, add, delete) against a GoalStore
// and publishes SyncState snapshots through a watch channel. The rules:
//
// - Local state mutates only on confirmed remote success. No optimistic
//   update, therefore no rollback path.
// - A failed call leaves the goal list untouched and sets a fixed,
//   operation-specific error message. Success clears any prior message.
// - Every operation takes a generation number; a response is applied only
//   if no newer operation has started since. A stale response can never
//   overwrite the effect of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use gt_client::{GoalStore, StoreError};

use crate::state::{SyncState, SyncStatus};

/// Display messages for failed operations. The tagged `StoreError` cause
/// goes to the log; the UI gets exactly one of these.
const LOAD_FAILED: &str = "Failed to fetch goals.";
const ADD_FAILED: &str = "Could not add goal.";
const DELETE_FAILED: &str = "Could not delete goal.";

/// Owns the local goal list and sequences remote mutations.
///
/// Methods take `&self` and are safe to call from concurrent tasks; when
/// calls overlap, the generation counter decides — the most recently
/// started operation wins, and responses from superseded operations are
/// discarded.
pub struct Synchronizer<S> {
    store: S,
    tx: watch::Sender<SyncState>,
    generation: AtomicU64,
}

impl<S: GoalStore> Synchronizer<S> {
    /// Create a synchronizer over the given store. Starts idle with an
    /// empty goal list.
    pub fn new(store: S) -> Self {
        let (tx, _rx) = watch::channel(SyncState::default());
        Self {
            store,
            tx,
            generation: AtomicU64::new(0),
        }
    }

    /// Subscribe to state snapshots. The receiver immediately sees the
    /// current state and is notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.tx.subscribe()
    }

    /// The current state snapshot.
    pub fn state(&self) -> SyncState {
        self.tx.borrow().clone()
    }

    /// Replace the local list with the remote collection.
    pub async fn load(&self) {
        let gen = self.begin();
        let result = self.store.list_goals().await;
        match result {
            Ok(goals) => self.finish(gen, |state| {
                state.goals = goals;
                state.status = SyncStatus::Idle;
            }),
            Err(err) => self.fail(gen, "load", LOAD_FAILED, err),
        }
    }

    /// Create a goal with the given text and append it locally on success.
    ///
    /// The text is trimmed first; if nothing remains, no request is issued
    /// and the state does not change at all.
    pub async fn add(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let gen = self.begin();
        let result = self.store.create_goal(text).await;
        match result {
            Ok(goal) => self.finish(gen, |state| {
                state.goals.push(goal);
                state.status = SyncStatus::Idle;
            }),
            Err(err) => self.fail(gen, "add", ADD_FAILED, err),
        }
    }

    /// Delete the goal with the given id and remove it locally on success.
    ///
    /// Keyed strictly by id; if the store reports failure the local entry
    /// is retained.
    pub async fn delete(&self, id: i64) {
        let gen = self.begin();
        let result = self.store.delete_goal(id).await;
        match result {
            Ok(()) => self.finish(gen, move |state| {
                state.goals.retain(|g| g.id != id);
                state.status = SyncStatus::Idle;
            }),
            Err(err) => self.fail(gen, "delete", DELETE_FAILED, err),
        }
    }

    /// Start an operation: claim the next generation number and publish
    /// `Loading`. Both happen under the watch channel's lock so generation
    /// order matches the order in which `Loading` states are published.
    fn begin(&self) -> u64 {
        let mut gen = 0;
        self.tx.send_modify(|state| {
            gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.status = SyncStatus::Loading;
        });
        gen
    }

    /// Apply a successful response, unless a newer operation has started
    /// since ours — then the response is stale and is dropped.
    fn finish<F: FnOnce(&mut SyncState)>(&self, gen: u64, apply: F) {
        self.tx.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != gen {
                tracing::debug!(generation = gen, "discarding stale response");
                return false;
            }
            apply(state);
            true
        });
    }

    /// Record a failed response: log the tagged cause, surface the fixed
    /// display message. The goal list is never touched on failure. Stale
    /// failures are dropped like stale successes.
    fn fail(&self, gen: u64, op: &str, message: &str, err: StoreError) {
        tracing::warn!(operation = op, error = %err, "goal store operation failed");
        self.finish(gen, |state| {
            state.status = SyncStatus::Error(message.to_string());
        });
    }
}
