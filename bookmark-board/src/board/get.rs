//! GetBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Get the whole board: every column with its rows nested in board order
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GetBoard;

operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Get every column with its rows"
);

impl GetBoard {
    pub fn new() -> Self {
        Self
    }
}

impl Execute<BoardContext, BoardError> for GetBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let state = ctx.state();
        let columns: Vec<Value> = state
            .columns()
            .iter()
            .map(|column| {
                let rows: Vec<_> = state.rows_in_column(&column.id).collect();
                json!({
                    "id": column.id,
                    "title": column.title,
                    "rows": rows,
                })
            })
            .collect();

        ExecutionResult::Unchanged {
            value: json!({
                "columns": columns,
                "revision": ctx.revision(),
            }),
        }
    }
}
