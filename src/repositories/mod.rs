//! Repository layer owning the user collection.
//!
//! This module provides a clean separation between HTTP handling and record
//! storage, improving testability and maintainability.

pub mod user_repository;

pub use user_repository::{
    DeleteOutcome, InsertOutcome, ListOutcome, UpdateOutcome, UserRepository,
};
