//! GetColumn command

use crate::command::lookup;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::ColumnId;
use bookmark_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Get a column together with its rows
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GetColumn {
    /// The column ID to look up
    pub id: ColumnId,
}

operation!(
    GetColumn,
    verb = "get",
    noun = "column",
    description = "Get a column and the rows it contains"
);

impl GetColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for GetColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let state = ctx.state();
        let result = state
            .column(&self.id)
            .map(|column| {
                let rows: Vec<_> = state.rows_in_column(&self.id).collect();
                json!({
                    "id": column.id,
                    "title": column.title,
                    "rows": rows,
                })
            })
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.id.to_string(),
            });

        lookup(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewRow;

    #[test]
    fn test_get_column_with_rows() {
        let mut ctx = BoardContext::new();
        let mut work = None;
        ctx.mutate(|state| {
            let id = state.add_column("Work");
            let other = state.add_column("Other");
            state.add_row(NewRow::new(id.clone(), "a", "https://a.test"));
            state.add_row(NewRow::new(other, "b", "https://b.test"));
            state.add_row(NewRow::new(id.clone(), "c", "https://c.test"));
            work = Some(id);
            true
        });

        let result = GetColumn::new(work.unwrap())
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["title"], "Work");
        let names: Vec<_> = result["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_get_missing_column() {
        let mut ctx = BoardContext::new();
        let result = GetColumn::new("missing").execute(&mut ctx).into_result();
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
    }
}
