use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, ErrorResponse, HealthResponse, UpdateUserRequest, UserResponse,
};

/// OpenAPI documentation for the user microservice
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Microservice API",
        version = "1.0.0",
        description = "A small REST API for managing users: list, create, rename, and delete."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User management endpoints (CRUD operations)")
    ),
    paths(
        crate::handlers::get_users,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
