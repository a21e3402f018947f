//! Log sanitization utilities for masking sensitive data.
//!
//! Usernames are user-supplied PII and are masked before appearing in any
//! log line.

/// Mask a username for safe logging.
///
/// Shows only the first 3 characters followed by asterisks.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_username("johndoe"), "joh***");
/// assert_eq!(mask_username("ab"), "ab***");
/// ```
pub fn mask_username(username: &str) -> String {
    let visible_chars = username
        .char_indices()
        .nth(3)
        .map_or(username.len(), |(index, _)| index);
    format!("{}***", &username[..visible_chars])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_username() {
        assert_eq!(mask_username("johndoe"), "joh***");
        assert_eq!(mask_username("ab"), "ab***");
        assert_eq!(mask_username("a"), "a***");
    }

    #[test]
    fn test_mask_username_multibyte() {
        assert_eq!(mask_username("ülrich"), "ülr***");
    }
}
