//! EditRow command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::forms::ValidRow;
use crate::types::{Image, RowId};
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Replace the name, url and image of a row.
///
/// The row's column cannot be changed here; that only happens through drag
/// commands.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditRow {
    /// The row ID to edit
    pub id: RowId,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

operation!(
    EditRow,
    verb = "edit",
    noun = "row",
    description = "Replace a row's name, url and image"
);

impl EditRow {
    pub fn new(id: impl Into<RowId>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            image: None,
        }
    }

    pub fn from_form(id: impl Into<RowId>, row: ValidRow) -> Self {
        Self {
            id: id.into(),
            name: row.name,
            url: row.url,
            image: row.image,
        }
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }
}

impl Execute<BoardContext, BoardError> for EditRow {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let changed = ctx.mutate(|state| {
            state.edit_row(&self.id, &self.name, &self.url, self.image.as_ref())
        });
        let outcome = changed
            .then(|| ctx.state().row(&self.id).map(|r| json!(r)))
            .flatten();

        record(self, start, outcome)
    }
}
