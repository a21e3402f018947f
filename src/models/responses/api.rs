//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Problem-details style error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code of the failure
    #[schema(example = 404)]
    pub status: u16,
    /// Human-readable error description
    #[schema(example = "User not found.")]
    pub title: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}
