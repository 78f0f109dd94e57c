//! Catalog voice entries.
//!
//! A `Voice` is an immutable record supplied by the upstream catalog
//! provider. Its structured labels (`accent`, `gender`, `age_bracket`) are
//! treated as authoritative by the matching engine; absent labels mean the
//! voice is unconstrained in that dimension during filtering.

use crate::{AgeBracket, Gender, QualityTier, SourceProvider};
use serde::{Deserialize, Serialize};

/// A single candidate voice from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Provider-assigned identifier. Must be non-empty.
    pub id: String,
    /// Human-readable name shown to users.
    pub display_name: String,
    /// Which upstream provider supplied this voice.
    pub source_provider: SourceProvider,
    /// Accent label from a controlled-but-open vocabulary (e.g. "British",
    /// "Indian-American"). `None` means unconstrained.
    #[serde(default)]
    pub accent: Option<String>,
    /// Gender label. `None` means unconstrained.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Age bracket label. `None` means unconstrained.
    #[serde(default)]
    pub age_bracket: Option<AgeBracket>,
    /// Perceptual timbre tags (e.g. "deep", "raspy").
    #[serde(default)]
    pub timbre_tags: Vec<String>,
    /// Voice-characteristic descriptors (e.g. "warm", "confident").
    /// Never personality/behavior descriptors.
    #[serde(default)]
    pub tone_words: Vec<String>,
    /// Free-text description from the provider.
    #[serde(default)]
    pub description: Option<String>,
    /// Suggested use cases (e.g. "narration", "conversational").
    #[serde(default)]
    pub use_cases: Vec<String>,
    /// Curation tier, used for ranking tie-breaks.
    pub quality_tier: QualityTier,
}

/// A catalog record that violates the `Voice` invariants.
#[derive(Debug, thiserror::Error)]
pub enum InvalidVoice {
    /// The record has an empty `id`. Such records are skipped with a
    /// diagnostic during catalog validation, never allowed to fail a match.
    #[error("voice record has an empty id (display_name: {display_name:?})")]
    EmptyId {
        /// Display name of the offending record, for the diagnostic.
        display_name: String,
    },
}

impl Voice {
    /// Checks the record invariants.
    ///
    /// The only fatal-class condition in the catalog contract is a missing
    /// `id`; everything else (absent accent, absent gender, empty tag
    /// lists) is a legal, merely unconstrained record.
    pub fn validate(&self) -> Result<(), InvalidVoice> {
        if self.id.trim().is_empty() {
            return Err(InvalidVoice::EmptyId {
                display_name: self.display_name.clone(),
            });
        }
        Ok(())
    }
}
