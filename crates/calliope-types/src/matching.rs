//! Per-query value types produced and consumed by the matching engine.
//!
//! `ParsedAttributes` is the structured form of a free-text voice
//! description; `MatchResult` and `MatchDetails` are what the engine hands
//! back to the caller. All three are created fresh per matching call and
//! never persisted.

use crate::{AgeBracket, Gender, Voice};
use serde::{Deserialize, Serialize};

/// Structured attributes extracted from a free-text voice description.
///
/// Absent fields mean the query does not constrain that dimension.
/// `keywords` and `phrases` are derived once during extraction and reused
/// by the scorer so the description is never reparsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedAttributes {
    /// Normalized accent term, compound forms already resolved
    /// (e.g. "indian-american").
    pub accent: Option<String>,
    /// Requested gender. Never `Neutral` — a query either names a specific
    /// gender or leaves this unset.
    pub gender: Option<Gender>,
    /// Requested age bracket.
    pub age_bracket: Option<AgeBracket>,
    /// Profession/role/archetype term (e.g. "pirate", "detective"),
    /// normalized to its head role.
    pub character: Option<String>,
    /// Timbre words found in the description (e.g. "deep", "raspy").
    pub timbre: Vec<String>,
    /// Tone words found in the description (e.g. "warm", "confident").
    pub tones: Vec<String>,
    /// Stop-word-filtered lowercase tokens of the description.
    pub keywords: Vec<String>,
    /// 2- and 3-word phrases over the filtered tokens.
    pub phrases: Vec<String>,
}

impl ParsedAttributes {
    /// True when the query constrains at least one structured dimension.
    pub fn has_structured_constraints(&self) -> bool {
        self.accent.is_some()
            || self.gender.is_some()
            || self.age_bracket.is_some()
            || self.character.is_some()
    }
}

/// Which attribute categories matched for a candidate, for explainability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// The candidate's accent matched the query (exactly, regionally, or
    /// via the compound all-parts rule).
    pub accent_match: bool,
    /// The candidate's gender matched the requested gender.
    pub gender_match: bool,
    /// The candidate's age bracket matched the requested bracket.
    pub age_match: bool,
    /// Query keywords that overlapped the candidate's timbre tags.
    pub matched_tags: Vec<String>,
    /// Query tone words that overlapped the candidate's tone words
    /// (directly or via synonym).
    pub matched_tones: Vec<String>,
    /// Query keywords that overlapped the candidate's name, description, or
    /// use cases.
    pub matched_keywords: Vec<String>,
}

/// One ranked candidate surviving filtering, scoring, and the confidence
/// gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The catalog voice.
    pub voice: Voice,
    /// Signed relevance score. Unbounded; only comparisons are meaningful.
    pub score: f64,
    /// Category-level match breakdown.
    pub details: MatchDetails,
}
