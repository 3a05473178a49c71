/// Note entity
///
/// A note is written exactly once and never modified afterwards, so every
/// field is fixed at construction time.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted note
///
/// Serialized as `{"id": ..., "content": ..., "createdAt": ...}` both in HTTP
/// bodies and in the DynamoDB item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Server-assigned identifier (hyphenated UUID v4)
    pub id: String,
    /// Caller-supplied payload
    pub content: String,
    /// Creation time, ISO-8601 UTC with millisecond precision
    pub created_at: String,
}

impl Note {
    /// Create a new note with a fresh identifier, stamped with the current time
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_timestamp(content, Utc::now())
    }

    /// Create a new note with a fresh identifier and the given creation time
    pub fn with_timestamp(content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            created_at: format_timestamp(created_at),
        }
    }
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.sssZ`
fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
