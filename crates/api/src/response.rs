//! Small response bodies shared by several handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement for operations without a payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
