//! User-related response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::User;

/// User data returned by the listing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = 1)]
    pub id: u64,
    /// User's username
    #[schema(example = "User One")]
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
