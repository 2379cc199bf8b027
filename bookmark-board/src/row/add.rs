//! AddRow command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::forms::ValidRow;
use crate::types::{ColumnId, Image, NewRow};
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Append a new row (bookmark) to the board.
///
/// The column is not checked: callers only offer "add" on columns that exist.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddRow {
    /// Column the row belongs to
    pub column_id: ColumnId,
    /// Display name
    pub name: String,
    /// Absolute URL
    pub url: String,
    /// Optional icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

operation!(
    AddRow,
    verb = "add",
    noun = "row",
    description = "Append a new bookmark row"
);

impl AddRow {
    pub fn new(
        column_id: impl Into<ColumnId>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            name: name.into(),
            url: url.into(),
            image: None,
        }
    }

    /// Build from a validated row form
    pub fn from_form(column_id: impl Into<ColumnId>, row: ValidRow) -> Self {
        Self {
            column_id: column_id.into(),
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

impl Execute<BoardContext, BoardError> for AddRow {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let new_row = NewRow {
            column_id: self.column_id.clone(),
            name: self.name.clone(),
            url: self.url.clone(),
            image: self.image.clone(),
        };

        let mut id = None;
        ctx.mutate(|state| {
            id = Some(state.add_row(new_row));
            true
        });
        let row = id.and_then(|id| ctx.state().row(&id));

        record(self, start, row.map(|r| json!(r)))
    }
}
