//! Upstream catalog providers.
//!
//! A provider supplies raw `Voice` records; its labels are authoritative
//! and not revalidated beyond the record invariants. Implementations
//! exist for a local JSON file (tests, dev CLI) and an HTTP endpoint.

use crate::error::CatalogError;
use async_trait::async_trait;
use calliope_types::Voice;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Abstraction over the upstream voice-catalog source.
#[async_trait]
pub trait VoiceProvider: Send + Sync {
    /// Fetches the full current catalog.
    async fn fetch(&self) -> Result<Vec<Voice>, CatalogError>;
}

/// Drops records that violate the `Voice` invariants, logging one warning
/// per skipped record. Invalid data never fails the whole catalog.
pub fn validate_records(records: Vec<Voice>) -> Vec<Voice> {
    let total = records.len();
    let valid: Vec<Voice> = records
        .into_iter()
        .filter(|voice| match voice.validate() {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "skipping invalid catalog record");
                false
            }
        })
        .collect();
    let skipped = total - valid.len();
    if skipped > 0 {
        tracing::info!(total, skipped, "catalog validation dropped records");
    }
    valid
}

/// Reads the catalog from a local JSON file holding a `Vec<Voice>`.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl VoiceProvider for JsonFileProvider {
    async fn fetch(&self) -> Result<Vec<Voice>, CatalogError> {
        let raw = tokio::fs::read(&self.path).await?;
        let records: Vec<Voice> = serde_json::from_slice(&raw)?;
        Ok(validate_records(records))
    }
}

/// Fetches the catalog from an HTTP endpoint returning a JSON `Vec<Voice>`.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    url: String,
    bearer_token: Option<String>,
}

impl HttpProvider {
    /// Creates a provider for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
            bearer_token: None,
        })
    }

    /// Attaches a bearer token sent with every fetch.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[async_trait]
impl VoiceProvider for HttpProvider {
    async fn fetch(&self) -> Result<Vec<Voice>, CatalogError> {
        let mut request = self.client.get(&self.url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }
        let records: Vec<Voice> = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!(count = records.len(), url = %self.url, "fetched catalog");
        Ok(validate_records(records))
    }
}
