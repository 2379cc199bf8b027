//! DeleteRows command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::ColumnId;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Delete every row of a column. Run it after [`DeleteColumn`](crate::column::DeleteColumn)
/// with the same id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteRows {
    /// Column whose rows are removed
    pub column_id: ColumnId,
}

operation!(
    DeleteRows,
    verb = "delete",
    noun = "rows",
    description = "Delete every row belonging to a column"
);

impl DeleteRows {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for DeleteRows {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let mut count = 0;
        ctx.mutate(|state| {
            count = state.delete_rows(&self.column_id);
            count > 0
        });
        let outcome = (count > 0).then(|| {
            json!({
                "deleted": count,
                "column_id": self.column_id
            })
        });

        record(self, start, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{AddColumn, DeleteColumn};
    use crate::row::AddRow;

    #[test]
    fn test_delete_column_then_rows_cascades() {
        let mut ctx = BoardContext::new();
        let work = AddColumn::new("Work").execute(&mut ctx).into_result().unwrap();
        let home = AddColumn::new("Home").execute(&mut ctx).into_result().unwrap();
        let work = work["id"].as_str().unwrap();
        let home = home["id"].as_str().unwrap();

        AddRow::new(work, "a", "https://a.test").execute(&mut ctx);
        AddRow::new(home, "b", "https://b.test").execute(&mut ctx);
        AddRow::new(work, "c", "https://c.test").execute(&mut ctx);

        DeleteColumn::new(work).execute(&mut ctx);
        let result = DeleteRows::new(work).execute(&mut ctx).into_result().unwrap();

        assert_eq!(result["deleted"], 2);
        assert!(ctx.state().rows().iter().all(|r| r.column_id != work));
        assert_eq!(ctx.state().rows().len(), 1);
    }

    #[test]
    fn test_delete_rows_of_empty_column_is_noop() {
        let mut ctx = BoardContext::new();
        AddRow::new("c1", "a", "https://a.test").execute(&mut ctx);
        let revision = ctx.revision();

        let result = DeleteRows::new("c2").execute(&mut ctx);

        assert!(!result.is_applied());
        assert_eq!(ctx.revision(), revision);
    }
}
