//! Core user record.

/// A user record as held by the repository.
///
/// The id is assigned by the repository on insert and never changes; the
/// username is unique across live records when compared case-insensitively
/// with surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
}
