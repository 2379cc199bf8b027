//! DragCoordinator - feeds gesture events through the state machine and runs
//! the resulting commands through a processor

use super::item::{DragPayload, GestureEvent};
use super::transition::{transition, DragState};
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::processor::BoardOperationProcessor;
use bookmark_operations::{Operation, OperationProcessor};

/// Holds the drag state across the events of one gesture
#[derive(Debug, Default)]
pub struct DragCoordinator<P = BoardOperationProcessor> {
    state: DragState,
    processor: P,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> DragCoordinator<P>
where
    P: OperationProcessor<BoardContext, BoardError>,
{
    pub fn with_processor(processor: P) -> Self {
        Self {
            state: DragState::Idle,
            processor,
        }
    }

    /// Apply one gesture event. Returns whether the board changed.
    pub fn handle(&mut self, event: &GestureEvent, ctx: &mut BoardContext) -> Result<bool> {
        let state = std::mem::take(&mut self.state);
        let (next, command) = transition(state, event, ctx.state());
        self.state = next;

        let Some(command) = command else {
            return Ok(false);
        };

        let before = ctx.revision();
        tracing::trace!(op = %command.op_string(), "drag over");
        self.processor.process(&command, ctx)?;
        Ok(ctx.revision() != before)
    }

    /// The item being dragged, for drag-feedback rendering
    pub fn dragging(&self) -> Option<&DragPayload> {
        self.state.payload()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DragItem;
    use crate::types::NewRow;

    #[test]
    fn test_gesture_moves_row_between_columns() {
        let mut ctx = BoardContext::new();
        let (c1, c2, r1) = {
            let mut ids = None;
            ctx.mutate(|board| {
                let c1 = board.add_column("Work");
                let c2 = board.add_column("Home");
                let r1 = board.add_row(NewRow::new(c1.clone(), "a", "https://a.test"));
                ids = Some((c1, c2, r1));
                true
            });
            ids.unwrap()
        };
        let mut coordinator = DragCoordinator::new();
        let active = DragItem::row(r1.as_str()).in_column(c1);

        assert!(!coordinator.handle(&GestureEvent::start(active.clone()), &mut ctx).unwrap());
        assert!(coordinator.dragging().is_some());

        let over = GestureEvent::over(active, DragItem::column(c2.as_str()));
        assert!(coordinator.handle(&over, &mut ctx).unwrap());
        // Hovering the same target again is a no-op
        assert!(!coordinator.handle(&over, &mut ctx).unwrap());

        coordinator.handle(&GestureEvent::end(), &mut ctx).unwrap();
        assert!(coordinator.dragging().is_none());
        assert_eq!(ctx.state().rows()[0].column_id, c2);
        assert_eq!(ctx.read_activity(None).len(), 1);
    }

    #[test]
    fn test_row_over_unknown_column_leaves_board_alone() {
        let mut ctx = BoardContext::new();
        let (c1, r1) = {
            let mut ids = None;
            ctx.mutate(|board| {
                let c1 = board.add_column("Work");
                let r1 = board.add_row(NewRow::new(c1.clone(), "a", "https://a.test"));
                ids = Some((c1, r1));
                true
            });
            ids.unwrap()
        };
        let before = ctx.state().clone();
        let mut coordinator = DragCoordinator::new();
        let active = DragItem::row(r1.as_str()).in_column(c1);

        coordinator.handle(&GestureEvent::start(active.clone()), &mut ctx).unwrap();
        let over = GestureEvent::over(active, DragItem::column("stale-column"));
        assert!(!coordinator.handle(&over, &mut ctx).unwrap());
        coordinator.handle(&GestureEvent::end(), &mut ctx).unwrap();

        assert_eq!(ctx.state(), &before);
        assert!(ctx.read_activity(None).is_empty());
    }
}
