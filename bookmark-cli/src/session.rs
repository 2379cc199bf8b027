//! One CLI invocation: load the board, apply commands, save if changed

use anyhow::{Context, Result};
use bookmark_board::{
    persist::{FileSnapshotStore, Persistence},
    BoardConfig, BoardContext, BoardError, BoardOperationProcessor, Execute, OperationProcessor,
};
use serde_json::Value;
use tracing::debug;

pub struct Session {
    pub ctx: BoardContext,
    processor: BoardOperationProcessor,
    persistence: Persistence<FileSnapshotStore>,
    saved_revision: u64,
}

impl Session {
    pub async fn open(config: &BoardConfig) -> Result<Self> {
        let store = FileSnapshotStore::new(&config.store_dir);
        let path = store.path_for(&config.store_key)?;
        let persistence = Persistence::with_key(store, config.store_key.as_str());

        let mut ctx = BoardContext::new();
        persistence
            .rehydrate(&mut ctx)
            .await
            .with_context(|| format!("failed to load board from {}", path.display()))?;

        let processor = match &config.actor {
            Some(actor) => BoardOperationProcessor::with_actor(actor.as_str()),
            None => BoardOperationProcessor::new(),
        };

        Ok(Self {
            saved_revision: ctx.revision(),
            ctx,
            processor,
            persistence,
        })
    }

    pub fn run<O>(&mut self, operation: &O) -> Result<Value>
    where
        O: Execute<BoardContext, BoardError>,
    {
        self.processor
            .process(operation, &mut self.ctx)
            .with_context(|| format!("{} failed", operation.op_string()))
    }

    pub fn processor(&self) -> &BoardOperationProcessor {
        &self.processor
    }

    /// Persist the board when anything was applied
    pub async fn close(self) -> Result<()> {
        for entry in self.ctx.read_activity(None).iter().rev() {
            debug!(op = %entry.op, revision = entry.revision, input = %entry.input, "applied");
        }

        let path = self.persistence.store().path_for(self.persistence.key())?;
        self.persistence
            .save_if_dirty(&self.ctx, self.saved_revision)
            .await
            .with_context(|| format!("failed to save board to {}", path.display()))?;
        Ok(())
    }
}
