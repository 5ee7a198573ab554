use axum::extract::rejection::JsonRejection;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

/// Message shown when a signup form is submitted with a blank field.
pub const MISSING_FIELD_MESSAGE: &str = "Please fill all fields";
/// Message shown when login input does not match the stored record.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

#[derive(Debug, ThisError)]
pub enum UdaanError {
    #[error("Please fill all fields")]
    MissingField,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("Rejected request body: {0}")]
    Rejection(#[from] JsonRejection),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for UdaanError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            UdaanError::MissingField => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "MISSING_FIELD".to_string(),
                    message: MISSING_FIELD_MESSAGE.to_string(),
                },
            ),
            UdaanError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message: INVALID_CREDENTIALS_MESSAGE.to_string(),
                },
            ),
            UdaanError::InvalidTransaction(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorBody {
                    code: "INVALID_TRANSACTION".to_string(),
                    message: detail,
                },
            ),
            UdaanError::Rejection(rejection) => {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    (
                        StatusCode::PAYLOAD_TOO_LARGE,
                        ApiErrorBody {
                            code: "PAYLOAD_TOO_LARGE".to_string(),
                            message: "request body too large".to_string(),
                        },
                    )
                } else {
                    (
                        StatusCode::BAD_REQUEST,
                        ApiErrorBody {
                            code: "BAD_REQUEST".to_string(),
                            message: rejection.body_text(),
                        },
                    )
                }
            }
            e @ (UdaanError::Database(_) | UdaanError::Config(_) | UdaanError::Io(_)) => {
                error!(error = %e, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
