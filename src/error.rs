//! Error Types
//!
//! Failures of the gateway and of the view flows.

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Request timed out after {millis} ms")]
    Timeout { millis: u32 },

    #[error("Unexpected response: {0}")]
    Parse(String),

    #[error("The catalog is empty")]
    EmptyCollection,

    #[error("No beer is selected")]
    NoSelection,
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
