//! User repository owning the in-memory user collection.
//!
//! All reads and writes pass through this repository. Every operation takes
//! the store lock exactly once, so a uniqueness scan and the mutation it
//! guards execute as a single critical section with respect to concurrent
//! requests. The lock is never held across an `.await`.

use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};

use crate::models::User;
use crate::utils::mask_username;

/// Outcome of listing users.
#[derive(Debug, PartialEq)]
pub enum ListOutcome {
    /// All live records, ordered by ascending id.
    Users(Vec<User>),
    /// The store holds no records. Distinct from an error.
    Empty,
}

/// Outcome of inserting a user.
#[derive(Debug, PartialEq)]
pub enum InsertOutcome {
    /// The record was added; carries the record with its assigned id.
    Created(User),
    /// Another record already holds the normalized username.
    UsernameTaken,
}

/// Outcome of updating a user's username.
///
/// The taken check runs before the id lookup and does not exempt the target
/// record, so re-saving a record under its current username also reports
/// `UsernameTaken`.
#[derive(Debug, PartialEq)]
pub enum UpdateOutcome {
    Updated,
    UsernameTaken,
    UserNotFound,
}

/// Outcome of deleting a user.
#[derive(Debug, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    UserNotFound,
}

struct StoreInner {
    users: Vec<User>,
    /// Next id to hand out. Only ever incremented, so ids are not reused
    /// within a process lifetime even after deletes.
    next_id: u64,
}

/// Repository for user records.
///
/// The record vector and the id counter live behind a single mutex; see the
/// module docs for the atomicity contract.
pub struct UserRepository {
    inner: Mutex<StoreInner>,
}

impl UserRepository {
    /// Create an empty repository. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// List all users, ordered by ascending id.
    pub fn list(&self) -> ListOutcome {
        let inner = self.lock();

        if inner.users.is_empty() {
            debug!("Repository: listing requested on an empty store");
            return ListOutcome::Empty;
        }

        let mut users = inner.users.clone();
        users.sort_by_key(|user| user.id);

        ListOutcome::Users(users)
    }

    /// Insert a new user with a freshly assigned id.
    pub fn insert(&self, username: &str) -> InsertOutcome {
        let mut inner = self.lock();

        if username_taken(&inner.users, username) {
            warn!(
                "Insert rejected: username {} is taken",
                mask_username(username)
            );
            return InsertOutcome::UsernameTaken;
        }

        let user = User {
            id: inner.next_id,
            username: username.to_string(),
        };
        inner.next_id += 1;
        inner.users.push(user.clone());

        info!(
            "Inserted user {} with id {}",
            mask_username(&user.username),
            user.id
        );
        InsertOutcome::Created(user)
    }

    /// Change an existing user's username in place. The id never changes.
    pub fn update(&self, id: u64, new_username: &str) -> UpdateOutcome {
        let mut inner = self.lock();

        // Taken check first, over every live record including the target.
        if username_taken(&inner.users, new_username) {
            warn!(
                "Update of user {} rejected: username {} is taken",
                id,
                mask_username(new_username)
            );
            return UpdateOutcome::UsernameTaken;
        }

        match find_by_id_mut(&mut inner.users, id) {
            Some(user) => {
                user.username = new_username.to_string();
                info!("Updated username of user {}", id);
                UpdateOutcome::Updated
            }
            None => {
                debug!("Update failed: no user with id {}", id);
                UpdateOutcome::UserNotFound
            }
        }
    }

    /// Remove the user with the given id.
    pub fn delete(&self, id: u64) -> DeleteOutcome {
        let mut inner = self.lock();

        match inner.users.iter().position(|user| user.id == id) {
            Some(index) => {
                inner.users.remove(index);
                info!("Deleted user {}", id);
                DeleteOutcome::Deleted
            }
            None => {
                debug!("Delete failed: no user with id {}", id);
                DeleteOutcome::UserNotFound
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().expect("user store mutex poisoned")
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear scan comparing `username` against every live record,
/// case-insensitively and with surrounding whitespace trimmed.
fn username_taken(users: &[User], username: &str) -> bool {
    let candidate = normalize(username);
    users
        .iter()
        .any(|user| normalize(&user.username) == candidate)
}

/// Normalized form of a username, used only for equality, never stored.
fn normalize(username: &str) -> String {
    username.trim().to_lowercase()
}

fn find_by_id_mut(users: &mut [User], id: u64) -> Option<&mut User> {
    users.iter_mut().find(|user| user.id == id)
}
