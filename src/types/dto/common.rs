use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Current server time (RFC 3339)
    pub timestamp: String,
}
