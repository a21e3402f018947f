//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found.";
pub const ERR_USERNAME_TAKEN: &str = "Username is already in use.";
pub const ERR_NO_USERS: &str = "There are no users in the database.";

// Validation errors
pub const ERR_USERNAME_BLANK: &str = "Username must not be blank";
