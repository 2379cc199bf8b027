//! # Bookmark Operations
//!
//! This crate provides the `Operation` and `Execute` traits used by every board
//! command. Operations are structs where the fields ARE the parameters, so the
//! same value can be executed, serialized into a log entry, or sent across a
//! process boundary.
//!
//! ## Example
//!
//! ```ignore
//! use bookmark_operations::*;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! pub struct AddColumn {
//!     /// The column title
//!     pub title: String,
//! }
//!
//! operation!(AddColumn, verb = "add", noun = "column", description = "Append a column");
//!
//! impl Execute<BoardContext, BoardError> for AddColumn {
//!     fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
//!         // Applied when the board changed, Unchanged otherwise
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use serde_json::Value;
