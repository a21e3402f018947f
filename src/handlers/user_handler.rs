//! User management handlers for CRUD operations.
//!
//! Handlers adapt repository outcomes to HTTP responses and contain no
//! business logic of their own.

use actix_web::{web, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::constants::{ERR_NO_USERS, ERR_USERNAME_TAKEN, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::repositories::{
    DeleteOutcome, InsertOutcome, ListOutcome, UpdateOutcome, UserRepository,
};
use crate::validators::validation_errors_to_api_error;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, ordered by ascending id", body = [UserResponse]),
        (status = 404, description = "No users exist", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_users(repository: web::Data<UserRepository>) -> Result<HttpResponse, ApiError> {
    debug!("Listing all users");

    match repository.list() {
        ListOutcome::Users(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
            info!("Returning {} users", users.len());
            Ok(HttpResponse::Ok().json(users))
        }
        ListOutcome::Empty => Err(ApiError::NotFound(ERR_NO_USERS.to_string())),
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body(
        content = CreateUserRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 201, description = "The user was created"),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 409, description = "Username already in use", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    repository: web::Data<UserRepository>,
    form: web::Form<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    form.validate().map_err(validation_errors_to_api_error)?;

    match repository.insert(&form.user_name) {
        InsertOutcome::Created(user) => {
            info!("Created user {}", user.id);
            Ok(HttpResponse::Created().finish())
        }
        InsertOutcome::UsernameTaken => Err(ApiError::Conflict(ERR_USERNAME_TAKEN.to_string())),
    }
}

/// Rename an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "Id of the user to update")
    ),
    request_body(
        content = UpdateUserRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "The user was updated"),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 409, description = "Username already in use", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    repository: web::Data<UserRepository>,
    path: web::Path<u64>,
    form: web::Form<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    form.validate().map_err(validation_errors_to_api_error)?;

    debug!("Updating user {}", id);
    match repository.update(id, &form.new_username) {
        UpdateOutcome::Updated => Ok(HttpResponse::Ok().finish()),
        UpdateOutcome::UsernameTaken => Err(ApiError::Conflict(ERR_USERNAME_TAKEN.to_string())),
        UpdateOutcome::UserNotFound => Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())),
    }
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "Id of the user to delete")
    ),
    responses(
        (status = 200, description = "The user was deleted"),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    repository: web::Data<UserRepository>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    debug!("Deleting user {}", id);
    match repository.delete(id) {
        DeleteOutcome::Deleted => Ok(HttpResponse::Ok().finish()),
        DeleteOutcome::UserNotFound => Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())),
    }
}
