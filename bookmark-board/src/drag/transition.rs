//! The drag state machine: Idle -> Dragging -> Idle.
//!
//! [`transition`] is pure. It reads the board to resolve items but never
//! mutates it; the command it returns is what the coordinator executes.

use super::item::{DragItem, DragPayload, GestureEvent, ItemKind};
use crate::column::ReorderColumns;
use crate::context::BoardContext;
use crate::error::BoardError;
use crate::row::{ReorderRows, ReparentRow};
use crate::state::BoardState;
use crate::types::{ColumnId, RowId};
use bookmark_operations::{Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a drag gesture stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragPayload),
}

impl DragState {
    pub fn payload(&self) -> Option<&DragPayload> {
        match self {
            Self::Idle => None,
            Self::Dragging(payload) => Some(payload),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// A store operation chosen from the kinds of the dragged item and its target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragCommand {
    ReorderColumns(ReorderColumns),
    ReorderRows(ReorderRows),
    ReparentRow(ReparentRow),
}

impl Operation for DragCommand {
    fn verb(&self) -> &'static str {
        match self {
            Self::ReorderColumns(op) => op.verb(),
            Self::ReorderRows(op) => op.verb(),
            Self::ReparentRow(op) => op.verb(),
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Self::ReorderColumns(op) => op.noun(),
            Self::ReorderRows(op) => op.noun(),
            Self::ReparentRow(op) => op.noun(),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::ReorderColumns(op) => op.description(),
            Self::ReorderRows(op) => op.description(),
            Self::ReparentRow(op) => op.description(),
        }
    }
}

impl Execute<BoardContext, BoardError> for DragCommand {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        match self {
            Self::ReorderColumns(op) => op.execute(ctx),
            Self::ReorderRows(op) => op.execute(ctx),
            Self::ReparentRow(op) => op.execute(ctx),
        }
    }
}

/// Advance the drag state machine by one event
pub fn transition(
    state: DragState,
    event: &GestureEvent,
    board: &BoardState,
) -> (DragState, Option<DragCommand>) {
    match event {
        GestureEvent::Start { active } => match resolve_payload(board, active) {
            Some(payload) => (DragState::Dragging(payload), None),
            None => (DragState::Idle, None),
        },
        GestureEvent::Over { active, over } => {
            if !state.is_dragging() {
                return (state, None);
            }
            let command = over
                .as_ref()
                .filter(|over| over.id != active.id)
                .and_then(|over| command_for(board, active, over));
            (state, command)
        }
        GestureEvent::End => (DragState::Idle, None),
    }
}

fn resolve_payload(board: &BoardState, item: &DragItem) -> Option<DragPayload> {
    match item.kind {
        ItemKind::Column => board
            .column(&ColumnId::from_string(item.id.as_str()))
            .cloned()
            .map(DragPayload::Column),
        ItemKind::Row => board
            .row(&RowId::from_string(item.id.as_str()))
            .cloned()
            .map(DragPayload::Row),
    }
}

fn command_for(board: &BoardState, active: &DragItem, over: &DragItem) -> Option<DragCommand> {
    match (active.kind, over.kind) {
        (ItemKind::Row, ItemKind::Row) => Some(DragCommand::ReorderRows(ReorderRows::new(
            active.id.as_str(),
            over.id.as_str(),
        ))),
        (ItemKind::Row, ItemKind::Column) => Some(DragCommand::ReparentRow(ReparentRow::new(
            active.id.as_str(),
            over.id.as_str(),
        ))),
        (ItemKind::Column, ItemKind::Column) => Some(DragCommand::ReorderColumns(
            ReorderColumns::new(active.id.as_str(), over.id.as_str()),
        )),
        (ItemKind::Column, ItemKind::Row) => {
            // Hovering a row inside another column reorders against that column
            let target = over.column_id.clone().or_else(|| {
                board
                    .row(&RowId::from_string(over.id.as_str()))
                    .map(|row| row.column_id.clone())
            })?;
            (target != active.id.as_str()).then(|| {
                DragCommand::ReorderColumns(ReorderColumns::new(active.id.as_str(), target))
            })
        }
    }
}
