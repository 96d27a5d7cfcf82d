//! Shared response body types for API handlers.

use serde::Serialize;

/// Acknowledgement body `{ "message": ... }` returned by mutating endpoints.
///
/// Mutations deliberately do not echo the affected row; clients re-list.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
