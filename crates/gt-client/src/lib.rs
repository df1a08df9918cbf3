//! # gt-client
//!
//! HTTP client for the remote goal store.
//!
//! The store exposes a single REST collection at `{base}/goals`:
//!
//! | Operation | Method | Path          | Body             | Success |
//! |-----------|--------|---------------|------------------|---------|
//! | List      | GET    | `/goals`      | none             | 2xx, JSON array of goals |
//! | Create    | POST   | `/goals`      | `{"text": ...}`  | 2xx, the created goal |
//! | Delete    | DELETE | `/goals/{id}` | none             | 2xx, body ignored |
//!
//! ## Key components
//!
//! - [`Goal`] — the wire record: server-assigned integer id plus free text
//! - [`GoalStore`] — trait for anything that can list/create/delete goals
//! - [`GoalStoreClient`] — the reqwest-backed implementation
//! - [`StoreError`] — tagged failure causes (network / status / decode)

pub mod client;
pub mod error;
pub mod goal;
pub mod store;

pub use client::GoalStoreClient;
pub use error::StoreError;
pub use goal::Goal;
pub use store::GoalStore;
