//! The matching entry point.
//!
//! Pure, synchronous computation over an in-memory candidate list: no I/O,
//! no locking, no shared mutable state. Multiple calls may run fully in
//! parallel; each allocates its own `ParsedAttributes` and results.

use crate::accent::{match_accents, AccentMatch, RegionalAccentGraph};
use crate::extract::extract;
use crate::filter::pre_filter;
use crate::rank::rank_and_gate;
use crate::score::{score_candidate, ScoringWeights};
use calliope_types::{MatchResult, Voice};
use calliope_vocab::VocabularyIndex;

/// Per-call options.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Maximum number of results returned. Bounds output length only; it
    /// never affects which candidates are considered.
    pub max_results: usize,
    /// Exclude `Neutral`-gender candidates when the query names a gender.
    /// Used by callers implementing explicit gender search.
    pub strict_gender: bool,
    /// Score constants. Defaults preserve the ordering contract.
    pub weights: ScoringWeights,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_results: 5,
            strict_gender: false,
            weights: ScoringWeights::default(),
        }
    }
}

/// Matches a free-text description against a candidate catalog.
///
/// Returns a ranked, confidence-gated list — possibly empty, which is a
/// first-class result (no good match), never an error. Empty or
/// whitespace-only descriptions and empty catalogs yield an empty result
/// immediately.
pub fn match_voices(description: &str, candidates: &[Voice], max_results: usize) -> Vec<MatchResult> {
    match_voices_with(
        description,
        candidates,
        &MatchOptions {
            max_results,
            ..Default::default()
        },
    )
}

/// [`match_voices`] with explicit options.
pub fn match_voices_with(
    description: &str,
    candidates: &[Voice],
    options: &MatchOptions,
) -> Vec<MatchResult> {
    debug_assert!(
        options.weights.ordering_holds(),
        "scoring weights violate the relative-ordering contract"
    );

    if description.trim().is_empty() || candidates.is_empty() {
        return Vec::new();
    }

    // Malformed provider records are skipped with a diagnostic, never
    // allowed to fail the whole match.
    let valid: Vec<&Voice> = candidates
        .iter()
        .filter(|voice| match voice.validate() {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "skipping invalid catalog record");
                false
            }
        })
        .collect();

    let graph = RegionalAccentGraph::global();
    let attrs = extract(description);
    tracing::debug!(?attrs, "extracted query attributes");

    // Never invent a match for an attribute the catalog cannot satisfy:
    // an accent absent from the catalog and from every similarity
    // expansion of the accents present short-circuits to empty.
    if let Some(accent) = &attrs.accent {
        let index = VocabularyIndex::from_voices(valid.iter().copied());
        if !accent_satisfiable(accent, &index, graph) {
            tracing::debug!(%accent, "query accent unsatisfiable by catalog");
            return Vec::new();
        }
    }

    let survivors = pre_filter(valid.iter().copied(), &attrs, options.strict_gender, graph);
    if survivors.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::with_capacity(survivors.len());
    for voice in survivors {
        let (score, details) = score_candidate(voice, &attrs, &options.weights, graph);
        tracing::trace!(voice_id = %voice.id, score, "scored candidate");
        results.push(MatchResult {
            voice: voice.clone(),
            score,
            details,
        });
    }

    let ranked = rank_and_gate(
        results,
        attrs.character.is_some(),
        options.max_results,
        &options.weights,
    );
    tracing::debug!(returned = ranked.len(), "matching complete");
    ranked
}

/// True if the accent is present in the catalog exactly, or relates to
/// some present accent via the graph (regional or compound).
fn accent_satisfiable(
    accent: &str,
    index: &VocabularyIndex,
    graph: &RegionalAccentGraph,
) -> bool {
    if index.contains_accent(accent) {
        return true;
    }
    index
        .accents()
        .any(|present| match_accents(graph, accent, present) != AccentMatch::Mismatch)
}
