//! What a command did to the board

use crate::LogEntry;

/// Outcome of executing a command.
///
/// Only `Applied` carries a log entry: the activity log records changes to the
/// board, never reads, no-op drops or failures.
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// The board changed
    Applied { value: T, entry: LogEntry },
    /// A read, or a mutation that resolved to a no-op
    Unchanged { value: T },
    Failed(E),
}

impl<T, E> ExecutionResult<T, E> {
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Applied { value, .. } | Self::Unchanged { value } => Ok(value),
            Self::Failed(error) => Err(error),
        }
    }

    /// Separate the value from the entry destined for the activity log
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Applied { value, entry } => (Ok(value), Some(entry)),
            Self::Unchanged { value } => (Ok(value), None),
            Self::Failed(error) => (Err(error), None),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_applied_splits_into_value_and_entry() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Applied {
            value: 7,
            entry: LogEntry::new("add column", json!({}), json!({}), Duration::ZERO),
        };
        assert!(result.is_applied());

        let (value, entry) = result.split();
        assert_eq!(value, Ok(7));
        assert_eq!(entry.map(|e| e.op), Some("add column".to_string()));
    }

    #[test]
    fn test_unchanged_has_no_entry() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Unchanged { value: 1 };
        assert!(!result.is_applied());
        assert_eq!(result.into_result(), Ok(1));
    }

    #[test]
    fn test_failed_never_reaches_the_log() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Failed("missing".into());
        assert!(!result.is_applied());

        let (value, entry) = result.split();
        assert_eq!(value, Err("missing".to_string()));
        assert!(entry.is_none());
    }
}
