pub mod url;

pub use url::{CreateUrlRequest, CreateUrlResponse, UrlMetadataResponse};

use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
