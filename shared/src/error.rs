use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One rejected field of an incoming request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Violations come back ordered by field path so responses are stable.
    pub fn from_report(report: &garde::Report) -> Vec<Self> {
        let mut violations: Vec<Self> = report
            .iter()
            .map(|(path, error)| Self::new(path.to_string(), error.to_string()))
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        violations
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("validation failed for {} field(s)", .0.len())]
    ValidationError(Vec<FieldViolation>),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    SpecificOperationError(#[source] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::InvalidArgument(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            e @ AppError::SpecificOperationError(_) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match self {
            AppError::ValidationError(violations) => json!({
                "error": "validation failed",
                "violations": violations,
            }),
            _ if status_code == StatusCode::INTERNAL_SERVER_ERROR => json!({
                "error": "internal server error",
            }),
            e => json!({ "error": e.to_string() }),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<garde::Report> for AppError {
    fn from(report: garde::Report) -> Self {
        AppError::ValidationError(FieldViolation::from_report(&report))
    }
}

pub type AppResult<T> = Result<T, AppError>;
