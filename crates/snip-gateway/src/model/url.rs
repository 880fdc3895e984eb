use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use snip_core::UrlMapping;

#[derive(Deserialize)]
pub struct CreateUrlRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct CreateUrlResponse {
    pub short_url: String,
    pub short_path: String,
}

#[derive(Serialize)]
pub struct UrlMetadataResponse {
    pub full_url: String,
    pub created_at: Timestamp,
    pub last_accessed_at: Timestamp,
    pub expires_at: Timestamp,
    pub access_count: u64,
}

impl From<UrlMapping> for UrlMetadataResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            full_url: mapping.full_url,
            created_at: mapping.created_at,
            last_accessed_at: mapping.last_accessed_at,
            expires_at: mapping.expires_at,
            access_count: mapping.access_count,
        }
    }
}
