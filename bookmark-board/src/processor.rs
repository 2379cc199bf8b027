//! Board operation processor
//!
//! Executes commands against a [`BoardContext`], attributes logged entries to
//! the configured actor and appends them to the context's activity log.

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use bookmark_operations::{Execute, OperationProcessor};
use serde_json::Value;

/// Processor for board operations
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    /// Create a processor that records entries without an actor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor that attributes every entry to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

impl OperationProcessor<BoardContext, BoardError> for BoardOperationProcessor {
    fn process<O>(&self, operation: &O, ctx: &mut BoardContext) -> Result<Value>
    where
        O: Execute<BoardContext, BoardError> + ?Sized,
    {
        let op = operation.op_string();
        let (result, entry) = operation.execute(ctx).split();

        match (&result, entry) {
            (_, Some(entry)) => {
                let entry = match &self.actor {
                    Some(actor) => entry.with_actor(actor.as_str()),
                    None => entry,
                };
                tracing::debug!(
                    op = %op,
                    revision = ctx.revision(),
                    elapsed_us = entry.elapsed_us,
                    "applied operation"
                );
                ctx.append_activity(entry);
            }
            (Ok(_), None) => tracing::trace!(op = %op, "operation left the board unchanged"),
            (Err(error), None) => tracing::warn!(op = %op, %error, "operation failed"),
        }

        result
    }
}
