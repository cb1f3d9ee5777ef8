//! Shared response body types for API handlers.

use serde::Serialize;

/// Confirmation body for operations that return no record.
///
/// ```ignore
/// Ok(Json(MessageResponse::new("Pet deleted successfully")))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
