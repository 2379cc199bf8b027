//! Shared bookkeeping for board commands

use crate::error::BoardError;
use bookmark_operations::{ExecutionResult, LogEntry, Operation};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;

/// Turn the outcome of a mutation into an execution result.
///
/// `Some(output)` means the board changed and the command is recorded with its
/// input and output. `None` means the command resolved to a no-op (missing id,
/// item dropped onto itself, nothing to change) and stays out of the activity
/// log.
pub(crate) fn record<O>(
    op: &O,
    start: Instant,
    outcome: Option<Value>,
) -> ExecutionResult<Value, BoardError>
where
    O: Operation + Serialize,
{
    match outcome {
        Some(value) => {
            let input = serde_json::to_value(op).unwrap_or(Value::Null);
            ExecutionResult::Applied {
                entry: LogEntry::new(op.op_string(), input, value.clone(), start.elapsed()),
                value,
            }
        }
        None => ExecutionResult::Unchanged {
            value: json!({ "changed": false }),
        },
    }
}

/// Result of a lookup that is allowed to fail
pub(crate) fn lookup(result: Result<Value, BoardError>) -> ExecutionResult<Value, BoardError> {
    match result {
        Ok(value) => ExecutionResult::Unchanged { value },
        Err(error) => ExecutionResult::Failed(error),
    }
}
