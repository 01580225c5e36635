use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Locked state: {0}")]
    LockedState(String),

    #[error("Invalid carrier credentials: {0}")]
    InvalidCredentials(String),

    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message, retryable) = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    false,
                )
            }
            AppError::NotFound(msg) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
                false,
            ),
            AppError::LockedState(msg) => {
                log::warn!("Locked state: {msg}");
                (
                    actix_web::http::StatusCode::CONFLICT,
                    "LOCKED_STATE",
                    msg.clone(),
                    false,
                )
            }
            AppError::InvalidCredentials(msg) => {
                log::warn!("Carrier credential validation rejected: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "INVALID_CREDENTIALS",
                    msg.clone(),
                    false,
                )
            }
            AppError::TransportError(err) => {
                log::error!("Transport error: {err}");
                (
                    actix_web::http::StatusCode::BAD_GATEWAY,
                    "TRANSPORT_ERROR",
                    "Upstream request failed".to_string(),
                    true,
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                    false,
                )
            }
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message,
                "retryable": retryable
            }
        }))
    }
}
