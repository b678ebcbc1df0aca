use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use privet_srs::SrsError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Auth(String),
    /// Invalid request field. `location` names the offending field.
    #[error("{message}")]
    Validation { location: String, message: String },
    #[error("{0}")]
    NotFound(String),
    #[error("Scheduler error: {0}")]
    Srs(#[from] SrsError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Auth(_) | Self::Jwt(_) => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) | Self::Srs(SrsError::EmptyRing) => StatusCode::NOT_FOUND,
            Self::Srs(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            Self::Validation { location, message } => json!({
                "error": message,
                "reason": "ValidationError",
                "location": location,
            }),
            Self::Srs(SrsError::EmptyRing) => json!({ "error": "No questions available" }),
            Self::Srs(err) => {
                tracing::error!(error = %err, "ring data is inconsistent with the catalog");
                json!({ "error": "Internal server error" })
            }
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                json!({ "error": "Internal server error" })
            }
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal error");
                json!({ "error": "Internal server error" })
            }
            Self::Jwt(_) => json!({ "error": "Invalid or expired token" }),
            Self::Auth(message) | Self::NotFound(message) => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}
