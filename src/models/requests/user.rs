//! User-related request payloads.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_username_not_blank;

/// Form payload for creating a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Username for the new user (at most 50 characters, not blank)
    #[serde(rename = "userName")]
    #[validate(
        length(max = 50, message = "Username must be at most 50 characters"),
        custom(function = "validate_username_not_blank")
    )]
    #[schema(example = "New User")]
    pub user_name: String,
}

/// Form payload for renaming an existing user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// Replacement username (at most 50 characters, not blank)
    #[serde(rename = "newUsername")]
    #[validate(
        length(max = 50, message = "Username must be at most 50 characters"),
        custom(function = "validate_username_not_blank")
    )]
    #[schema(example = "Changed User")]
    pub new_username: String,
}
