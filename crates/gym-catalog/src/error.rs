//! Catalog error types.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while reconciling filters or talking to the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A query parameter carried an invalid percent-encoding.
    #[error("URI malformed: {0}")]
    MalformedQuery(String),

    /// A manufacturer filter parameter was not valid JSON.
    #[error("Invalid filter JSON in `{param}`: {message}")]
    InvalidFilterJson { param: String, message: String },

    /// The catalog service request failed.
    #[error("{0}")]
    Fetch(String),

    /// The router rejected a navigation.
    #[error("Navigation failed: {0}")]
    Navigation(String),
}

impl CatalogError {
    /// Whether this error came from malformed percent-encoding in the URL.
    pub fn is_malformed_query(&self) -> bool {
        matches!(self, CatalogError::MalformedQuery(_))
    }
}
