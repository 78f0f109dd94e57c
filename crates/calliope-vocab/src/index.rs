//! Catalog-derived vocabulary index.

use calliope_types::Voice;
use std::collections::HashSet;

/// The accent, tag, and tone values actually present in a catalog snapshot.
///
/// Derived once per snapshot and shared across matching calls. Extraction
/// recognizes terms from the static tables; the index is consulted up front
/// so a query naming an accent the catalog cannot satisfy (not even via
/// regional similarity) short-circuits to an empty result instead of being
/// scored against everything.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    accents: HashSet<String>,
    tags: HashSet<String>,
    tones: HashSet<String>,
}

impl VocabularyIndex {
    /// Builds the index from a catalog snapshot.
    pub fn from_voices<'a>(voices: impl IntoIterator<Item = &'a Voice>) -> Self {
        let mut accents = HashSet::new();
        let mut tags = HashSet::new();
        let mut tones = HashSet::new();

        for voice in voices {
            if let Some(accent) = &voice.accent {
                let normalized = accent.trim().to_lowercase();
                if !normalized.is_empty() {
                    accents.insert(normalized);
                }
            }
            for tag in &voice.timbre_tags {
                tags.insert(tag.trim().to_lowercase());
            }
            for tone in &voice.tone_words {
                tones.insert(tone.trim().to_lowercase());
            }
        }

        Self {
            accents,
            tags,
            tones,
        }
    }

    /// True if some catalog voice carries exactly this accent value
    /// (case-insensitive).
    pub fn contains_accent(&self, accent: &str) -> bool {
        self.accents.contains(&accent.trim().to_lowercase())
    }

    /// Distinct normalized accent values present in the catalog.
    pub fn accents(&self) -> impl Iterator<Item = &str> {
        self.accents.iter().map(|s| s.as_str())
    }

    /// Distinct normalized timbre tag values present in the catalog.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|s| s.as_str())
    }

    /// Distinct normalized tone values present in the catalog.
    pub fn tones(&self) -> impl Iterator<Item = &str> {
        self.tones.iter().map(|s| s.as_str())
    }
}
