use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, UrlMetadataResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::ShortPath;

pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUrlRequest>,
) -> Result<Json<CreateUrlResponse>> {
    validate_url(&request.url)?;

    let short_path = state.shortener().shorten(&request.url).await?;
    Ok(Json(CreateUrlResponse {
        short_url: short_path.to_url(state.base_url()),
        short_path: short_path.to_string(),
    }))
}

pub async fn get_url_handler(
    Path(short_path): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlMetadataResponse>> {
    // Malformed candidates are rejected without a store lookup.
    if !state.shortener().is_valid_format(&short_path) {
        return Err(AppError::NotFound);
    }

    let mapping = state
        .shortener()
        .lookup(&ShortPath::new(short_path))
        .await?;
    Ok(Json(mapping.into()))
}

pub async fn delete_url_handler(
    Path(short_path): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    if !state.shortener().is_valid_format(&short_path) {
        return Err(AppError::NotFound);
    }

    if state
        .shortener()
        .delete(&ShortPath::new(short_path))
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

/// Resolves a short path and answers with `302 Found` + `Location`,
/// counting the access. Lookup is by extracted path, never by the literal
/// request URL.
pub async fn redirect_handler(
    Path(short_path): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    if !state.shortener().is_valid_format(&short_path) {
        return Err(AppError::NotFound);
    }

    let full_url = state
        .shortener()
        .redirect(&ShortPath::new(short_path))
        .await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, full_url)]).into_response())
}

/// Basic request validation: non-empty, an http(s) scheme, and a host.
fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(AppError::InvalidUrl("URL cannot be empty".to_string()));
    }

    let Some((scheme, rest)) = url.split_once("://") else {
        return Err(AppError::InvalidUrl(format!(
            "URL must have a valid scheme and host: {}",
            url
        )));
    };

    if rest.is_empty() {
        return Err(AppError::InvalidUrl(format!(
            "URL must have a valid scheme and host: {}",
            url
        )));
    }

    let scheme = scheme.to_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(AppError::InvalidUrl(format!(
            "URL scheme must be http or https: {}",
            scheme
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/a/b?q=1").is_ok());
    }

    #[test]
    fn validate_rejects_empty_and_schemeless() {
        assert!(validate_url("").is_err());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("https://").is_err());
    }

    #[test]
    fn validate_rejects_foreign_schemes() {
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("javascript://alert(1)").is_err());
    }
}
