//! Drag metadata and gesture events

use crate::state::BoardState;
use crate::types::{Column, ColumnId, Row, RowId};
use serde::{Deserialize, Serialize};

/// What a draggable element is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Column,
    Row,
}

/// Metadata the gesture layer attaches to each draggable or droppable element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragItem {
    pub kind: ItemKind,
    pub id: String,
    /// For rows: the column the row is rendered in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
}

impl DragItem {
    pub fn column(id: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Column,
            id: id.into(),
            column_id: None,
        }
    }

    pub fn row(id: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Row,
            id: id.into(),
            column_id: None,
        }
    }

    pub fn in_column(mut self, column_id: impl Into<ColumnId>) -> Self {
        self.column_id = Some(column_id.into());
        self
    }

    /// Metadata for an element on the current board. Rows carry their column.
    pub fn resolve(board: &BoardState, id: &str) -> Option<Self> {
        if let Some(column) = board.column(&ColumnId::from_string(id)) {
            return Some(Self::column(column.id.as_str()));
        }
        board
            .row(&RowId::from_string(id))
            .map(|row| Self::row(row.id.as_str()).in_column(row.column_id.clone()))
    }
}

/// One event of a drag gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureEvent {
    Start { active: DragItem },
    Over {
        active: DragItem,
        #[serde(default)]
        over: Option<DragItem>,
    },
    End,
}

impl GestureEvent {
    pub fn start(active: DragItem) -> Self {
        Self::Start { active }
    }

    pub fn over(active: DragItem, over: impl Into<Option<DragItem>>) -> Self {
        Self::Over {
            active,
            over: over.into(),
        }
    }

    pub fn end() -> Self {
        Self::End
    }
}

/// The full value being dragged, for drag-feedback rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DragPayload {
    Column(Column),
    Row(Row),
}

impl DragPayload {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Column(_) => ItemKind::Column,
            Self::Row(_) => ItemKind::Row,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Column(column) => column.id.as_str(),
            Self::Row(row) => row.id.as_str(),
        }
    }
}
