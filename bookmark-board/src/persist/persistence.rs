//! Persistence - binds a snapshot store to one key and moves boards in and out

use super::store::SnapshotStore;
use crate::board::{SetColumns, SetRows};
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::BoardSnapshot;
use bookmark_operations::Execute;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Key the board is stored under unless configured otherwise
pub const DEFAULT_KEY: &str = "store";

/// Loads and saves one board. Last writer wins; nothing is merged.
#[derive(Debug)]
pub struct Persistence<S> {
    store: Arc<S>,
    key: String,
}

impl<S> Clone for Persistence<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
        }
    }
}

impl<S: SnapshotStore + 'static> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store: Arc::new(store),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the board with the persisted snapshot.
    ///
    /// Returns `false` when nothing is stored under the key; the board is left
    /// untouched in that case.
    pub async fn rehydrate(&self, ctx: &mut BoardContext) -> Result<bool> {
        let Some(bytes) = self.store.load(&self.key).await? else {
            tracing::debug!(key = %self.key, "no snapshot to rehydrate");
            return Ok(false);
        };

        let snapshot: BoardSnapshot = serde_json::from_slice(&bytes)
            .map_err(|e| BoardError::corrupt_snapshot(self.key.as_str(), e.to_string()))?;
        let (columns, rows) = (snapshot.columns.len(), snapshot.rows.len());

        SetColumns::new(snapshot.columns).execute(ctx).into_result()?;
        SetRows::new(snapshot.rows).execute(ctx).into_result()?;

        tracing::debug!(key = %self.key, columns, rows, "rehydrated board");
        Ok(true)
    }

    /// Write the current board and wait for the write to finish
    pub async fn save(&self, ctx: &BoardContext) -> Result<()> {
        let bytes = serde_json::to_vec(&ctx.snapshot())?;
        self.store.save(&self.key, &bytes).await?;
        tracing::debug!(key = %self.key, revision = ctx.revision(), "saved board");
        Ok(())
    }

    /// Write the current board without waiting. Failures are logged, never
    /// returned.
    pub fn save_in_background(&self, ctx: &BoardContext) -> JoinHandle<()> {
        let snapshot = ctx.snapshot();
        let store = Arc::clone(&self.store);
        let key = self.key.clone();

        tokio::spawn(async move {
            let result = match serde_json::to_vec(&snapshot) {
                Ok(bytes) => store.save(&key, &bytes).await,
                Err(e) => Err(e.into()),
            };
            if let Err(error) = result {
                tracing::warn!(key = %key, %error, "background save failed");
            }
        })
    }

    /// Save only when the board changed since `last_saved_revision`.
    /// Returns the revision that is now persisted.
    pub async fn save_if_dirty(&self, ctx: &BoardContext, last_saved_revision: u64) -> Result<u64> {
        if ctx.revision() == last_saved_revision {
            return Ok(last_saved_revision);
        }
        self.save(ctx).await?;
        Ok(ctx.revision())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemorySnapshotStore;
    use crate::types::NewRow;

    fn populated() -> BoardContext {
        let mut ctx = BoardContext::new();
        ctx.mutate(|board| {
            let column = board.add_column("Work");
            board.add_row(NewRow::new(column, "CI", "https://ci.test"));
            true
        });
        ctx
    }

    #[tokio::test]
    async fn test_save_then_rehydrate() {
        let persistence = Persistence::new(MemorySnapshotStore::new());
        let source = populated();
        persistence.save(&source).await.unwrap();

        let mut target = BoardContext::new();
        assert!(persistence.rehydrate(&mut target).await.unwrap());

        assert_eq!(target.state(), source.state());
    }

    #[tokio::test]
    async fn test_rehydrate_without_snapshot() {
        let persistence = Persistence::new(MemorySnapshotStore::new());
        let mut ctx = populated();

        assert!(!persistence.rehydrate(&mut ctx).await.unwrap());
        assert_eq!(ctx.state().columns().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_reported() {
        let store = MemorySnapshotStore::new();
        store.save(DEFAULT_KEY, b"{not json").await.unwrap();
        let persistence = Persistence::new(store);

        let error = persistence.rehydrate(&mut BoardContext::new()).await.unwrap_err();

        assert!(matches!(error, BoardError::CorruptSnapshot { ref key, .. } if key == "store"));
    }

    #[tokio::test]
    async fn test_save_if_dirty_tracks_revision() {
        let persistence = Persistence::with_key(MemorySnapshotStore::new(), "board");
        let ctx = populated();

        let saved = persistence.save_if_dirty(&ctx, 0).await.unwrap();
        assert_eq!(saved, 1);
        assert!(persistence.store().load("board").await.unwrap().is_some());

        let second = Persistence::with_key(MemorySnapshotStore::new(), "board");
        assert_eq!(second.save_if_dirty(&ctx, 1).await.unwrap(), 1);
        assert!(second.store().load("board").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_background_save_completes() {
        let persistence = Persistence::new(MemorySnapshotStore::new());

        persistence.save_in_background(&populated()).await.unwrap();

        assert!(persistence.store().load(DEFAULT_KEY).await.unwrap().is_some());
    }
}
