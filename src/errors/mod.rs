use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

/// API error taxonomy, mapped onto HTTP statuses by `ResponseError`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    ValidationError(Vec<String>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Conflict(message) => write!(f, "Conflict: {}", message),
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
        }
    }
}

impl ApiError {
    fn title(&self) -> String {
        match self {
            ApiError::NotFound(message) | ApiError::Conflict(message) => message.clone(),
            ApiError::ValidationError(errors) => errors.join(", "),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            status: status.as_u16(),
            title: self.title(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(
            ApiError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("x".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::ValidationError(vec!["x".to_string()]).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn validation_errors_join_into_a_single_title() {
        let error = ApiError::ValidationError(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(error.title(), "first, second");
    }
}
