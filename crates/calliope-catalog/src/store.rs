//! Read-mostly catalog snapshot store.

use crate::error::CatalogError;
use crate::provider::VoiceProvider;
use calliope_types::Voice;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};
use tokio::time::{sleep, Duration};

/// An immutable catalog snapshot.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// The candidate voices in this snapshot.
    pub voices: Vec<Voice>,
    /// When this snapshot was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    /// Wraps freshly fetched voices into a snapshot stamped now.
    pub fn new(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            fetched_at: Utc::now(),
        }
    }

    /// An empty snapshot, used before the first successful fetch.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Holds the current snapshot behind an atomic swap.
///
/// Readers clone the `Arc` and keep using their snapshot for as long as
/// they need it; a refresh replaces the whole `Arc` rather than mutating
/// voices in place, so an in-flight matching call never observes a
/// half-updated catalog.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    /// Creates a store holding an empty snapshot.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Catalog::empty())),
        }
    }

    /// Creates a store seeded with an initial snapshot.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The current snapshot. Cheap: clones an `Arc`, never the voices.
    pub fn current(&self) -> Arc<Catalog> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Atomically replaces the snapshot.
    pub fn swap(&self, catalog: Catalog) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(catalog);
    }

    /// Fetches from the provider and swaps in the result. On failure the
    /// previous snapshot is retained.
    pub async fn refresh(&self, provider: &dyn VoiceProvider) -> Result<usize, CatalogError> {
        let voices = provider.fetch().await?;
        let count = voices.len();
        self.swap(Catalog::new(voices));
        tracing::info!(count, "catalog snapshot refreshed");
        Ok(count)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the periodic catalog refresh.
///
/// This task runs indefinitely. A failed fetch is logged and the previous
/// snapshot stays in place until the next interval.
pub async fn start_refresh_task(
    store: Arc<CatalogStore>,
    provider: Arc<dyn VoiceProvider>,
    interval: Duration,
) {
    if interval.is_zero() {
        tracing::warn!("catalog refresh task disabled (interval=0)");
        return;
    }

    tracing::info!(interval_secs = interval.as_secs(), "starting catalog refresh task");

    loop {
        sleep(interval).await;

        match store.refresh(provider.as_ref()).await {
            Ok(count) => {
                tracing::debug!(count, "periodic catalog refresh succeeded");
            }
            Err(err) => {
                tracing::error!(%err, "periodic catalog refresh failed; keeping previous snapshot");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calliope_types::{QualityTier, SourceProvider};

    fn voice(id: &str) -> Voice {
        Voice {
            id: id.to_string(),
            display_name: id.to_string(),
            source_provider: SourceProvider::Community,
            accent: None,
            gender: None,
            age_bracket: None,
            timbre_tags: Vec::new(),
            tone_words: Vec::new(),
            description: None,
            use_cases: Vec::new(),
            quality_tier: QualityTier::Standard,
        }
    }

    #[test]
    fn swap_replaces_the_snapshot_for_new_readers() {
        let store = CatalogStore::new();
        assert!(store.current().voices.is_empty());

        store.swap(Catalog::new(vec![voice("a")]));
        assert_eq!(store.current().voices.len(), 1);
    }

    #[test]
    fn in_flight_readers_keep_their_snapshot() {
        let store = CatalogStore::with_catalog(Catalog::new(vec![voice("old")]));
        let held = store.current();

        store.swap(Catalog::new(vec![voice("new"), voice("er")]));

        // The held snapshot is unchanged; a fresh read sees the new one.
        assert_eq!(held.voices.len(), 1);
        assert_eq!(held.voices[0].id, "old");
        assert_eq!(store.current().voices.len(), 2);
    }
}
