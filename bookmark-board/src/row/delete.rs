//! DeleteRow command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::RowId;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Delete a single row
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteRow {
    /// The row ID to delete
    pub id: RowId,
}

operation!(
    DeleteRow,
    verb = "delete",
    noun = "row",
    description = "Delete a single row"
);

impl DeleteRow {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for DeleteRow {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let deleted = ctx.mutate(|state| state.delete_row(&self.id));
        let outcome = deleted.then(|| {
            json!({
                "deleted": true,
                "id": self.id
            })
        });

        record(self, start, outcome)
    }
}
