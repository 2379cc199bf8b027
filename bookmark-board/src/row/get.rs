//! GetRow command

use crate::command::lookup;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::RowId;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Get a row by ID
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GetRow {
    pub id: RowId,
}

operation!(GetRow, verb = "get", noun = "row", description = "Get a row by ID");

impl GetRow {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for GetRow {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let result = ctx
            .state()
            .row(&self.id)
            .map(|row| json!(row))
            .ok_or_else(|| BoardError::RowNotFound {
                id: self.id.to_string(),
            });

        lookup(result)
    }
}
