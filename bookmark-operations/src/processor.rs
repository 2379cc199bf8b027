//! Operation processors

use crate::Execute;
use serde_json::Value;

/// Runs operations against a context and takes care of what surrounds them:
/// attributing and recording log entries, tracing, bookkeeping.
pub trait OperationProcessor<C, E> {
    fn process<O>(&self, operation: &O, ctx: &mut C) -> Result<Value, E>
    where
        O: Execute<C, E> + ?Sized;
}
