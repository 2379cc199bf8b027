//! Drag-and-drop coordination.
//!
//! A gesture is a stream of events: one `Start`, any number of `Over`, one
//! `End`. Each `Over` is applied to the board immediately, so the board always
//! shows the live arrangement. `End` commits nothing and rolls nothing back.

mod coordinator;
mod item;
mod transition;

pub use coordinator::DragCoordinator;
pub use item::{DragItem, DragPayload, GestureEvent, ItemKind};
pub use transition::{transition, DragCommand, DragState};
