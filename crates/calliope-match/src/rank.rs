//! Ranking and the confidence gate.

use crate::score::ScoringWeights;
use calliope_types::{MatchResult, QualityTier};
use std::cmp::Ordering;

/// Sorts scored candidates, applies the confidence gate, and bounds the
/// output length.
///
/// Ties are broken by preferring the higher quality tier. The gate is
/// query-dependent: a character/profession query is semantically narrow
/// and demands higher certainty. When the top score falls below the
/// threshold the entire result set is suppressed — a weak guess is worse
/// than admitting no match, so the caller can fall back to "no results"
/// messaging instead of presenting something misleading.
pub fn rank_and_gate(
    mut results: Vec<MatchResult>,
    character_query: bool,
    max_results: usize,
    weights: &ScoringWeights,
) -> Vec<MatchResult> {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| tier_rank(a.voice.quality_tier).cmp(&tier_rank(b.voice.quality_tier)))
    });

    let threshold = if character_query {
        weights.character_confidence_threshold
    } else {
        weights.confidence_threshold
    };

    match results.first() {
        None => Vec::new(),
        Some(top) if top.score < threshold => Vec::new(),
        Some(_) => {
            results.truncate(max_results);
            results
        }
    }
}

fn tier_rank(tier: QualityTier) -> u8 {
    match tier {
        QualityTier::High => 0,
        QualityTier::Standard => 1,
    }
}
