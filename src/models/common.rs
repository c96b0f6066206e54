//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Backend primary key. Every entity uses a numeric id.
pub type EntityId = i64;

/// Acknowledgement body returned by logout and similar endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    /// Human readable confirmation.
    #[serde(default)]
    pub message: String,
}

/// Error body the backend writes alongside an error status.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
