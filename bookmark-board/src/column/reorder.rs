//! ReorderColumns command

use crate::command::record;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::ColumnId;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Move a column to the position of another column
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReorderColumns {
    /// The column being dragged
    pub active: ColumnId,
    /// The column whose position it takes
    pub over: ColumnId,
}

operation!(
    ReorderColumns,
    verb = "reorder",
    noun = "columns",
    description = "Move a column to the position currently held by another column"
);

impl ReorderColumns {
    pub fn new(active: impl Into<ColumnId>, over: impl Into<ColumnId>) -> Self {
        Self {
            active: active.into(),
            over: over.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for ReorderColumns {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let moved = ctx.mutate(|state| state.reorder_columns(&self.active, &self.over));
        let outcome = moved.then(|| {
            json!({
                "moved": self.active,
                "index": ctx.state().column_index(&self.active)
            })
        });

        record(self, start, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;

    fn context() -> BoardContext {
        let mut ctx = BoardContext::new();
        ctx.mutate(|state| {
            state.set_columns(vec![
                Column::with_id("a", "A"),
                Column::with_id("b", "B"),
                Column::with_id("c", "C"),
            ]);
            true
        });
        ctx
    }

    fn order(ctx: &BoardContext) -> Vec<&str> {
        ctx.state().columns().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_reorder_columns() {
        let mut ctx = context();
        let result = ReorderColumns::new("c", "a")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["index"], 0);
        assert_eq!(order(&ctx), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_column_onto_itself_is_noop() {
        let mut ctx = context();
        let revision = ctx.revision();
        let result = ReorderColumns::new("b", "b").execute(&mut ctx);

        assert!(!result.is_applied());
        assert_eq!(ctx.revision(), revision);
        assert_eq!(order(&ctx), vec!["a", "b", "c"]);
    }
}
