//! Activity log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// One applied change to a board
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// ULID, so entries sort by creation time
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// "add row", "reorder columns", ...
    pub op: String,
    /// The command as it was issued
    pub input: Value,
    pub output: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    /// Board revision this change produced. Zero until the entry is recorded.
    #[serde(default)]
    pub revision: u64,
    pub elapsed_us: u64,
}

impl LogEntry {
    pub fn new(op: impl Into<String>, input: Value, output: Value, elapsed: Duration) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor: None,
            revision: 0,
            elapsed_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn at_revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }
}
