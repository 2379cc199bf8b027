//! ListRows command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::{ColumnId, Row};
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// List rows in sequence order, optionally only those of one column
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ListRows {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
}

operation!(
    ListRows,
    verb = "list",
    noun = "rows",
    description = "List rows in board order, optionally filtered by column"
);

impl ListRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_column(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: Some(column_id.into()),
        }
    }
}

impl Execute<BoardContext, BoardError> for ListRows {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let state = ctx.state();
        let rows: Vec<&Row> = match &self.column_id {
            Some(column_id) => state.rows_in_column(column_id).collect(),
            None => state.rows().iter().collect(),
        };
        let count = rows.len();

        ExecutionResult::Unchanged {
            value: json!({
                "rows": rows,
                "count": count
            }),
        }
    }
}
