//! AddColumn command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::forms::ColumnForm;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Append a new column to the board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddColumn {
    /// The column title
    pub title: String,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Append a new column to the board"
);

impl AddColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Build from a submitted form. The form must already be validated.
    pub fn from_form(form: ColumnForm) -> Self {
        Self { title: form.title }
    }
}

impl Execute<BoardContext, BoardError> for AddColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let mut id = None;
        ctx.mutate(|state| {
            id = Some(state.add_column(self.title.as_str()));
            true
        });
        let column = id.and_then(|id| ctx.state().column(&id));

        record(self, start, column.map(|c| json!(c)))
    }
}
