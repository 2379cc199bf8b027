//! ReorderRows command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::RowId;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Drop a row onto another row.
///
/// The dragged row takes the target's column (if different) and the target's
/// index in the row sequence, so one gesture can both reparent and reposition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReorderRows {
    /// The row being dragged
    pub active: RowId,
    /// The row it is dropped onto
    pub over: RowId,
}

operation!(
    ReorderRows,
    verb = "reorder",
    noun = "rows",
    description = "Move a row to another row's position, adopting its column"
);

impl ReorderRows {
    pub fn new(active: impl Into<RowId>, over: impl Into<RowId>) -> Self {
        Self {
            active: active.into(),
            over: over.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for ReorderRows {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let moved = ctx.mutate(|state| state.reorder_rows(&self.active, &self.over));
        let outcome = moved.then(|| {
            let state = ctx.state();
            json!({
                "moved": self.active,
                "index": state.row_index(&self.active),
                "column_id": state.row(&self.active).map(|r| &r.column_id),
            })
        });

        record(self, start, outcome)
    }
}
