//! DeleteColumn command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::ColumnId;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Delete a column.
///
/// Only the column goes away. Its rows stay in the row sequence, pointing at
/// a column that no longer exists, until the caller runs
/// [`DeleteRows`](crate::row::DeleteRows) for the same id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column (its rows must be deleted separately)"
);

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for DeleteColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let deleted = ctx.mutate(|state| state.delete_column(&self.id));
        let outcome = deleted.then(|| {
            json!({
                "deleted": true,
                "id": self.id
            })
        });

        record(self, start, outcome)
    }
}
