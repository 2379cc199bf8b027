//! Column: a named bookmark category

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// A column groups rows by reference; it does not hold a list of its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    /// Create a column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
        }
    }

    /// Create a column with a known id
    pub fn with_id(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
