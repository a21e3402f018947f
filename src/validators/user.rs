//! User-related custom validators.

use validator::ValidationError;

use crate::constants::ERR_USERNAME_BLANK;

/// Custom validator for username fields.
/// Rejects usernames that are empty or consist only of whitespace.
pub fn validate_username_not_blank(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        let mut error = ValidationError::new("username_blank");
        error.message = Some(ERR_USERNAME_BLANK.into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_usernames() {
        assert!(validate_username_not_blank("User One").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace_only_usernames() {
        assert!(validate_username_not_blank("").is_err());
        assert!(validate_username_not_blank("   ").is_err());
        assert!(validate_username_not_blank("\t\n").is_err());
    }
}
