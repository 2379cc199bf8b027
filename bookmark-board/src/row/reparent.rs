//! ReparentRow command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::{ColumnId, RowId};
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Drop a row onto a column (its header or empty body).
///
/// Only the column changes. The row keeps its index in the row sequence, so
/// in the new column's view it lands wherever that index falls among the
/// column's rows, usually at the end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReparentRow {
    /// The row being dragged
    pub active: RowId,
    /// The column it is dropped onto
    pub column_id: ColumnId,
}

operation!(
    ReparentRow,
    verb = "reparent",
    noun = "row",
    description = "Move a row into another column without changing its position"
);

impl ReparentRow {
    pub fn new(active: impl Into<RowId>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            active: active.into(),
            column_id: column_id.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for ReparentRow {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let moved = ctx.mutate(|state| state.reparent_row(&self.active, &self.column_id));
        let outcome = moved.then(|| {
            json!({
                "moved": self.active,
                "index": ctx.state().row_index(&self.active),
                "column_id": self.column_id,
            })
        });

        record(self, start, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;
    use crate::row::AddRow;

    #[test]
    fn test_reparent_row_keeps_sequence_index() {
        let mut ctx = BoardContext::new();
        let c1 = AddColumn::new("C1").execute(&mut ctx).into_result().unwrap();
        let c2 = AddColumn::new("C2").execute(&mut ctx).into_result().unwrap();
        let c1 = c1["id"].as_str().unwrap();
        let c2 = c2["id"].as_str().unwrap();

        let r1 = AddRow::new(c1, "R1", "https://1.test")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        AddRow::new(c1, "R2", "https://2.test").execute(&mut ctx);
        AddRow::new(c2, "R3", "https://3.test").execute(&mut ctx);
        let r1 = r1["id"].as_str().unwrap();

        let result = ReparentRow::new(r1, c2).execute(&mut ctx).into_result().unwrap();

        assert_eq!(result["index"], 0);
        let state = ctx.state();
        assert_eq!(state.rows()[0].id, r1);
        assert_eq!(state.rows()[0].column_id, c2);
    }

    #[test]
    fn test_reparent_into_current_column_is_noop() {
        let mut ctx = BoardContext::new();
        let c1 = AddColumn::new("C1").execute(&mut ctx).into_result().unwrap();
        let c1 = c1["id"].as_str().unwrap();
        let row = AddRow::new(c1, "R1", "https://1.test")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        let result = ReparentRow::new(row["id"].as_str().unwrap(), c1).execute(&mut ctx);

        assert!(!result.is_applied());
    }

    #[test]
    fn test_reparent_into_unknown_column_is_noop() {
        let mut ctx = BoardContext::new();
        let c1 = AddColumn::new("C1").execute(&mut ctx).into_result().unwrap();
        let c1 = c1["id"].as_str().unwrap();
        let row = AddRow::new(c1, "R1", "https://1.test")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        let revision = ctx.revision();

        let result = ReparentRow::new(row["id"].as_str().unwrap(), "ghost")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["changed"], false);
        assert_eq!(ctx.revision(), revision);
        assert_eq!(ctx.state().rows()[0].column_id, c1);
    }
}
