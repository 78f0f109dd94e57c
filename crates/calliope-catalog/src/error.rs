use thiserror::Error;

/// Errors that can occur while fetching or parsing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a catalog file.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog payload was not valid JSON for the expected shape.
    #[error("failed to parse catalog payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// HTTP fetch from the upstream provider failed.
    #[error("catalog provider request failed: {0}")]
    Http(#[from] reqwest::Error),
}
