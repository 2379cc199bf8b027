//! EditColumn command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::forms::ColumnForm;
use crate::types::ColumnId;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Rename a column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditColumn {
    /// The column ID to edit
    pub id: ColumnId,
    /// New title
    pub title: String,
}

operation!(
    EditColumn,
    verb = "edit",
    noun = "column",
    description = "Replace a column's title"
);

impl EditColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn from_form(id: impl Into<ColumnId>, form: ColumnForm) -> Self {
        Self::new(id, form.title)
    }
}

impl Execute<BoardContext, BoardError> for EditColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let changed = ctx.mutate(|state| state.edit_column(&self.id, &self.title));
        let outcome = changed
            .then(|| ctx.state().column(&self.id).map(|c| json!(c)))
            .flatten();

        record(self, start, outcome)
    }
}
