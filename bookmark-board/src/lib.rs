//! Bookmark board engine
//!
//! A board is two ordered sequences: columns, and rows (bookmarks) that each
//! point at the column they belong to. Row order is global; a column shows its
//! rows in the order they appear in the row sequence.
//!
//! ## Overview
//!
//! - **Commands** - every change is a command struct (`AddColumn`, `ReorderRows`, ...)
//!   executed against a [`BoardContext`], optionally through the [`BoardOperationProcessor`]
//!   which records an activity log
//! - **No-op on missing ids** - mutations that name an unknown column or row leave the
//!   board untouched instead of failing
//! - **Drag and drop** - [`drag::DragCoordinator`] turns gesture events into reorder
//!   and reparent commands
//! - **Snapshots** - [`persist::Persistence`] saves and rehydrates the whole board
//!
//! ## Basic Usage
//!
//! ```rust
//! use bookmark_board::{
//!     column::AddColumn, row::AddRow, BoardContext, BoardOperationProcessor, OperationProcessor,
//! };
//!
//! # fn example() -> bookmark_board::Result<()> {
//! let mut ctx = BoardContext::new();
//! let processor = BoardOperationProcessor::new();
//!
//! let column = processor.process(&AddColumn::new("Reading"), &mut ctx)?;
//! let column_id = column["id"].as_str().unwrap_or_default();
//! processor.process(&AddRow::new(column_id, "Rust", "https://rust-lang.org"), &mut ctx)?;
//!
//! assert_eq!(ctx.state().rows().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod command;
pub mod config;
mod context;
mod error;
pub mod forms;
mod processor;
mod state;
pub mod types;

// Command modules
pub mod board;
pub mod column;
pub mod row;

pub mod drag;
pub mod persist;

pub use bookmark_operations::{
    Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};

pub use config::BoardConfig;
pub use context::BoardContext;
pub use error::{BoardError, Result};
pub use processor::BoardOperationProcessor;
pub use state::BoardState;

pub use types::{BoardSnapshot, Column, ColumnId, Image, NewRow, Row, RowId};
