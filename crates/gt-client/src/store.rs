// store.rs — The GoalStore trait: the seam between synchronizer and transport.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::goal::Goal;

/// Anything that can list, create, and delete goals.
///
/// [`GoalStoreClient`](crate::GoalStoreClient) is the real HTTP-backed
/// implementation; tests substitute in-memory fakes. The trait is
/// dyn-compatible so consumers can hold a `Box<dyn GoalStore>` if they
/// don't want to be generic over the store.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Fetch the full goal collection, in the store's order.
    async fn list_goals(&self) -> Result<Vec<Goal>, StoreError>;

    /// Create a goal with the given text; returns the stored record
    /// including its server-assigned id.
    async fn create_goal(&self, text: &str) -> Result<Goal, StoreError>;

    /// Delete the goal with the given id.
    async fn delete_goal(&self, id: i64) -> Result<(), StoreError>;
}
