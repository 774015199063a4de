use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use models::FieldError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),

    #[error("User not found")]
    UserNotFound,

    #[error("User financial data not found")]
    ProfileNotFound,

    #[error("Email already registered. Please login instead.")]
    EmailTaken,

    #[error("Invalid email or password. Please check and try again, or create an account.")]
    InvalidCredentials,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound | ApiError::ProfileNotFound => StatusCode::NOT_FOUND,
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        let body = match self {
            ApiError::Validation(errors) => Json(json!({
                "success": false,
                "message": message,
                "errors": errors,
            })),
            _ => Json(json!({
                "success": false,
                "message": message,
            })),
        };

        (status, body).into_response()
    }
}
