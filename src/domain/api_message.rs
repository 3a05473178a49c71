/// Message bodies returned by the API for non-note responses
///
/// Every error response carries a body of the form `{"message": "..."}`.
use serde::{Deserialize, Serialize};

/// Fixed message texts
pub mod text {
    pub const MISSING_CONTENT: &str = "Missing 'content' in request body.";
    pub const MISSING_NOTE_ID: &str = "Note ID is missing in the path.";
    pub const NOTE_NOT_FOUND: &str = "Note not found.";
    pub const ROUTE_NOT_FOUND: &str = "Route not found.";
    pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
}

/// `{"message": "..."}` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// POST body without a usable `content` field
    pub fn missing_content() -> Self {
        Self::new(text::MISSING_CONTENT)
    }

    /// GET without a note id in the path
    pub fn missing_note_id() -> Self {
        Self::new(text::MISSING_NOTE_ID)
    }

    /// GET for an id that was never created
    pub fn note_not_found() -> Self {
        Self::new(text::NOTE_NOT_FOUND)
    }

    /// Any method/path pair outside the supported routes
    pub fn route_not_found() -> Self {
        Self::new(text::ROUTE_NOT_FOUND)
    }

    /// Internal fault, described by its own text
    ///
    /// Falls back to a generic message when the description is blank.
    pub fn internal(description: &str) -> Self {
        if description.trim().is_empty() {
            Self::new(text::INTERNAL_SERVER_ERROR)
        } else {
            Self::new(description)
        }
    }

    /// Convert message to JSON string
    pub fn to_json(&self) -> String {
        serde_json::json!({ "message": self.message }).to_string()
    }
}
