//! SetColumns and SetRows commands - wholesale replacement for rehydration

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::{Column, Row};
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Replace the whole column sequence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetColumns {
    pub columns: Vec<Column>,
}

operation!(
    SetColumns,
    verb = "set",
    noun = "columns",
    description = "Replace the column sequence"
);

impl SetColumns {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

impl Execute<BoardContext, BoardError> for SetColumns {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let replaced = ctx.mutate(|state| {
            if state.columns() == self.columns.as_slice() {
                return false;
            }
            state.set_columns(self.columns.clone());
            true
        });

        record(self, start, replaced.then(|| json!({ "columns": self.columns.len() })))
    }
}

/// Replace the whole row sequence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetRows {
    pub rows: Vec<Row>,
}

operation!(
    SetRows,
    verb = "set",
    noun = "rows",
    description = "Replace the row sequence"
);

impl SetRows {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl Execute<BoardContext, BoardError> for SetRows {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let replaced = ctx.mutate(|state| {
            if state.rows() == self.rows.as_slice() {
                return false;
            }
            state.set_rows(self.rows.clone());
            true
        });

        record(self, start, replaced.then(|| json!({ "rows": self.rows.len() })))
    }
}
