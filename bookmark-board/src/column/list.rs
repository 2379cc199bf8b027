//! ListColumns command

use crate::context::BoardContext;
use crate::error::BoardError;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// List all columns in board order
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ListColumns;

operation!(
    ListColumns,
    verb = "list",
    noun = "columns",
    description = "List all columns in board order"
);

impl ListColumns {
    pub fn new() -> Self {
        Self
    }
}

impl Execute<BoardContext, BoardError> for ListColumns {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let state = ctx.state();
        let columns: Vec<Value> = state
            .columns()
            .iter()
            .map(|column| {
                json!({
                    "id": column.id,
                    "title": column.title,
                    "row_count": state.rows_in_column(&column.id).count(),
                })
            })
            .collect();

        let count = columns.len();

        ExecutionResult::Unchanged {
            value: json!({
                "columns": columns,
                "count": count
            }),
        }
    }
}
