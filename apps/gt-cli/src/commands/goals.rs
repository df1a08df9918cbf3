// goals.rs — Goal subcommands: list, add, delete.
//
// Each command loads the remote collection first so the local mirror is
// current, runs the mutation (if any), then prints the resulting list.
// Synchronizer error messages become nonzero exits via anyhow.

use anyhow::{bail, Result};

use gt_client::GoalStore;
use gt_sync::Synchronizer;

pub async fn list<S: GoalStore>(sync: &Synchronizer<S>) -> Result<()> {
    sync.load().await;
    check(sync)?;
    print_goals(sync);
    Ok(())
}

pub async fn add<S: GoalStore>(sync: &Synchronizer<S>, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("goal text must not be empty");
    }

    sync.load().await;
    check(sync)?;

    sync.add(text).await;
    check(sync)?;

    if let Some(added) = sync.state().goals.last() {
        println!("Added goal {}: {}", added.id, added.text);
    }
    print_goals(sync);
    Ok(())
}

pub async fn delete<S: GoalStore>(sync: &Synchronizer<S>, id: i64) -> Result<()> {
    sync.load().await;
    check(sync)?;

    sync.delete(id).await;
    check(sync)?;

    println!("Deleted goal {}", id);
    print_goals(sync);
    Ok(())
}

/// Bail with the synchronizer's display message if the last operation
/// failed.
fn check<S: GoalStore>(sync: &Synchronizer<S>) -> Result<()> {
    if let Some(msg) = sync.state().error_message() {
        bail!("{msg}");
    }
    Ok(())
}

fn print_goals<S: GoalStore>(sync: &Synchronizer<S>) {
    let state = sync.state();
    if state.goals.is_empty() {
        println!("No goals yet. Start by adding one!");
        return;
    }
    for goal in &state.goals {
        println!("{:>6}  {}", goal.id, goal.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gt_client::{Goal, StoreError};

    /// A store that must never be reached.
    struct PanicStore;

    #[async_trait]
    impl GoalStore for PanicStore {
        async fn list_goals(&self) -> Result<Vec<Goal>, StoreError> {
            panic!("unexpected network call");
        }
        async fn create_goal(&self, _text: &str) -> Result<Goal, StoreError> {
            panic!("unexpected network call");
        }
        async fn delete_goal(&self, _id: i64) -> Result<(), StoreError> {
            panic!("unexpected network call");
        }
    }

    #[tokio::test]
    async fn add_rejects_blank_text_before_any_call() {
        let sync = Synchronizer::new(PanicStore);
        let err = add(&sync, "   ").await.unwrap_err().to_string();
        assert!(err.contains("must not be empty"), "{err}");
    }

    /// A store whose list always fails.
    struct DownStore;

    #[async_trait]
    impl GoalStore for DownStore {
        async fn list_goals(&self) -> Result<Vec<Goal>, StoreError> {
            Err(StoreError::HttpStatus(503))
        }
        async fn create_goal(&self, _text: &str) -> Result<Goal, StoreError> {
            Err(StoreError::HttpStatus(503))
        }
        async fn delete_goal(&self, _id: i64) -> Result<(), StoreError> {
            Err(StoreError::HttpStatus(503))
        }
    }

    #[tokio::test]
    async fn list_surfaces_the_fetch_message() {
        let sync = Synchronizer::new(DownStore);
        let err = list(&sync).await.unwrap_err().to_string();
        assert_eq!(err, "Failed to fetch goals.");
    }

    #[tokio::test]
    async fn delete_surfaces_the_fetch_message_when_load_fails() {
        // The initial load fails before the delete is ever attempted.
        let sync = Synchronizer::new(DownStore);
        let err = delete(&sync, 1).await.unwrap_err().to_string();
        assert_eq!(err, "Failed to fetch goals.");
    }
}
