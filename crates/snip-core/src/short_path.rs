use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The short identifier for a shortened URL, excluding any base-URL prefix.
///
/// Syntactic validation (length and alphabet) is the generator's concern;
/// this type only carries the identifier around and knows how to join it
/// with a public base URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortPath(String);

impl ShortPath {
    /// Creates a short path from its string form.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the short path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl Display for ShortPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShortPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ShortPath {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
