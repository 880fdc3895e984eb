use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_shortener::ShortenError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Gateway-level error, carrying the HTTP translation of core outcomes.
#[derive(Debug)]
pub enum AppError {
    /// No live mapping for the requested short path.
    NotFound,
    /// The submitted URL failed request validation.
    InvalidUrl(String),
    /// A core failure that is not a missing mapping.
    Shorten(ShortenError),
}

impl From<ShortenError> for AppError {
    fn from(value: ShortenError) -> Self {
        match value {
            ShortenError::NotFound(_) => Self::NotFound,
            other => Self::Shorten(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "no mapping exists for this short path".to_string(),
            ),
            AppError::InvalidUrl(message) => (StatusCode::BAD_REQUEST, "Bad Request", message),
            AppError::Shorten(err @ ShortenError::GenerationExhausted { .. }) => (
                // Transient but alarming: the caller may retry the whole
                // operation.
                StatusCode::SERVICE_UNAVAILABLE,
                "Service Unavailable",
                err.to_string(),
            ),
            AppError::Shorten(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                err.to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}
