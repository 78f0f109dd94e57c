//! Relevance scoring.
//!
//! Assigns a signed score to every candidate that survived the pre-filter.
//! Penalties are applied before bonuses so a pile of keyword overlaps can
//! never outweigh a hard mismatch that slipped past the filter in a
//! non-strict mode. Structured labels (accent, gender, age) are
//! authoritative provider data and dominate every free-text heuristic: the
//! structured subtotal is re-applied at double weight on top of itself.
//!
//! The exact constants are defaults; the *relative ordering* is the
//! contract (see `ScoringWeights::ordering_holds`).

use crate::accent::{match_accents, AccentMatch, RegionalAccentGraph};
use crate::filter::{character_match, CharacterMatch};
use calliope_types::{Gender, MatchDetails, ParsedAttributes, QualityTier, SourceProvider, Voice};
use calliope_vocab as vocab;
use serde::{Deserialize, Serialize};

/// Score constants. Loadable from configuration; defaults preserve the
/// mandated ordering: gender mismatch ≫ age mismatch > accent mismatch,
/// exact accent > regional > compound, structured ≫ free-text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Penalty for an age bracket mismatch.
    pub age_mismatch_penalty: f64,
    /// Penalty when a specific gender was requested and the candidate has
    /// a specific, different gender. Must dominate all other terms.
    pub gender_mismatch_penalty: f64,
    /// Penalty for an accent that is neither exact nor regional.
    pub accent_mismatch_penalty: f64,
    /// Penalty when an accent was requested but the candidate has none.
    pub accent_missing_penalty: f64,
    /// Bonus for an exact accent match.
    pub accent_exact_bonus: f64,
    /// Bonus for a regionally-similar accent.
    pub accent_regional_bonus: f64,
    /// Bonus for a compound accent where all parts matched.
    pub accent_compound_bonus: f64,
    /// Bonus for an exact gender match.
    pub gender_match_bonus: f64,
    /// Bonus for an exact age bracket match.
    pub age_match_bonus: f64,
    /// Reduced bonus when the age bucket is only inferred from the
    /// candidate's free-text description.
    pub age_inferred_bonus: f64,
    /// The structured subtotal is added again multiplied by this factor.
    pub structured_multiplier: f64,
    /// Bonus per query keyword overlapping a candidate timbre tag.
    pub tag_match_bonus: f64,
    /// Extra bonus when that keyword is a strong timbre signal.
    pub strong_timbre_bonus: f64,
    /// Bonus per direct tone word overlap.
    pub tone_match_bonus: f64,
    /// Reduced bonus per synonym-table tone match.
    pub tone_synonym_bonus: f64,
    /// Character bonus tiers, descending so an exact match always
    /// outranks a coincidental partial one.
    pub character_tag_bonus: f64,
    pub character_description_bonus: f64,
    pub character_partial_bonus: f64,
    /// Bonus per overlapping use-case term.
    pub use_case_bonus: f64,
    /// Nominal bonus per keyword hit in the display name.
    pub name_match_bonus: f64,
    /// Nominal bonus per whole-word keyword hit in the description.
    pub description_word_bonus: f64,
    /// Nominal bonus per extracted phrase found in the description.
    pub phrase_match_bonus: f64,
    /// Down-weighting factor for all name/description/phrase bonuses;
    /// unstructured text is less trustworthy than curated labels.
    pub free_text_discount: f64,
    /// Tie-break bonus for high-tier voices.
    pub quality_tier_bonus: f64,
    /// Tie-break bonus for the preferred source provider.
    pub preferred_source_bonus: f64,
    /// Which provider earns the source tie-break.
    pub preferred_source: SourceProvider,
    /// Confidence gate for generic descriptive queries.
    pub confidence_threshold: f64,
    /// Stricter confidence gate for narrow character queries.
    pub character_confidence_threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            age_mismatch_penalty: 200.0,
            gender_mismatch_penalty: 10_000.0,
            accent_mismatch_penalty: 120.0,
            accent_missing_penalty: 80.0,
            accent_exact_bonus: 100.0,
            accent_regional_bonus: 60.0,
            accent_compound_bonus: 40.0,
            gender_match_bonus: 80.0,
            age_match_bonus: 80.0,
            age_inferred_bonus: 40.0,
            structured_multiplier: 2.0,
            tag_match_bonus: 30.0,
            strong_timbre_bonus: 20.0,
            tone_match_bonus: 20.0,
            tone_synonym_bonus: 10.0,
            character_tag_bonus: 120.0,
            character_description_bonus: 60.0,
            character_partial_bonus: 25.0,
            use_case_bonus: 10.0,
            name_match_bonus: 15.0,
            description_word_bonus: 10.0,
            phrase_match_bonus: 20.0,
            free_text_discount: 0.5,
            quality_tier_bonus: 15.0,
            preferred_source_bonus: 10.0,
            preferred_source: SourceProvider::ElevenLabs,
            confidence_threshold: 30.0,
            character_confidence_threshold: 100.0,
        }
    }
}

impl ScoringWeights {
    /// Checks the relative-ordering contract. The literal magnitudes are
    /// free; these relations are not.
    pub fn ordering_holds(&self) -> bool {
        self.gender_mismatch_penalty > self.age_mismatch_penalty
            && self.age_mismatch_penalty > self.accent_mismatch_penalty
            && self.accent_mismatch_penalty >= self.accent_missing_penalty
            && self.accent_exact_bonus > self.accent_regional_bonus
            && self.accent_regional_bonus > self.accent_compound_bonus
            && self.age_match_bonus > self.age_inferred_bonus
            && self.character_tag_bonus > self.character_description_bonus
            && self.character_description_bonus > self.character_partial_bonus
            && self.tone_match_bonus > self.tone_synonym_bonus
            && self.free_text_discount < 1.0
            && self.character_confidence_threshold > self.confidence_threshold
    }
}

/// Scores one candidate. Returns the signed score and the category-level
/// breakdown for explainability.
pub fn score_candidate(
    voice: &Voice,
    attrs: &ParsedAttributes,
    weights: &ScoringWeights,
    graph: &RegionalAccentGraph,
) -> (f64, MatchDetails) {
    let mut score = 0.0;
    let mut details = MatchDetails::default();

    let description = voice
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let name = voice.display_name.to_lowercase();

    // Penalties first.
    score -= penalties(voice, attrs, weights, graph);

    // Structured-label bonuses, re-applied at double weight so curated
    // provider labels dominate every free-text heuristic below.
    let structured = structured_bonuses(voice, attrs, weights, graph, &description, &mut details);
    score += structured + structured * weights.structured_multiplier;

    // Tag/timbre overlap.
    let tags_lower: Vec<String> = voice
        .timbre_tags
        .iter()
        .map(|t| t.trim().to_lowercase())
        .collect();
    for keyword in &attrs.keywords {
        if tags_lower.iter().any(|t| t == keyword) {
            score += weights.tag_match_bonus;
            if vocab::is_strong_timbre(keyword) {
                score += weights.strong_timbre_bonus;
            }
            details.matched_tags.push(keyword.clone());
        }
    }

    // Tone overlap, direct then synonym.
    let tones_lower: Vec<String> = voice
        .tone_words
        .iter()
        .map(|t| t.trim().to_lowercase())
        .collect();
    for tone in &attrs.tones {
        if tones_lower.iter().any(|t| t == tone) {
            score += weights.tone_match_bonus;
            details.matched_tones.push(tone.clone());
        } else if tones_lower
            .iter()
            .any(|t| vocab::tones_are_synonyms(tone, t))
        {
            score += weights.tone_synonym_bonus;
            details.matched_tones.push(tone.clone());
        }
    }

    // Character, tiered.
    if let Some(role) = &attrs.character {
        score += match character_match(voice, role) {
            Some(CharacterMatch::Tag) => weights.character_tag_bonus,
            Some(CharacterMatch::Description) => weights.character_description_bonus,
            Some(CharacterMatch::Partial) => weights.character_partial_bonus,
            None => 0.0,
        };
    }

    // Use-case overlap.
    for keyword in &attrs.keywords {
        if voice
            .use_cases
            .iter()
            .any(|u| u.trim().eq_ignore_ascii_case(keyword))
        {
            score += weights.use_case_bonus;
            details.matched_keywords.push(keyword.clone());
        }
    }

    // Free-text name/description/phrase matches, down-weighted.
    let discount = weights.free_text_discount;
    let description_age = vocab::age_from_phrases(&description);
    for keyword in &attrs.keywords {
        // A generic person noun must not reinforce a candidate whose
        // description signals a different age than the query asked for.
        if vocab::is_generic_noun(keyword) {
            if let (Some(wanted), Some(hinted)) = (attrs.age_bracket, description_age) {
                if wanted != hinted {
                    continue;
                }
            }
        }
        let mut hit = false;
        if vocab::contains_phrase(&name, keyword) {
            score += weights.name_match_bonus * discount;
            hit = true;
        }
        if vocab::contains_phrase(&description, keyword) {
            score += weights.description_word_bonus * discount;
            hit = true;
        }
        if hit && !details.matched_keywords.contains(keyword) {
            details.matched_keywords.push(keyword.clone());
        }
    }
    for phrase in &attrs.phrases {
        if vocab::contains_phrase(&description, phrase) {
            score += weights.phrase_match_bonus * discount;
        }
    }

    // Quality/source tie-bonus.
    if voice.quality_tier == QualityTier::High {
        score += weights.quality_tier_bonus;
    }
    if voice.source_provider == weights.preferred_source {
        score += weights.preferred_source_bonus;
    }

    (score, details)
}

/// Residual mismatch penalties. The pre-filter removes most of these
/// outright, but unlabeled candidates and lenient gender mode can still
/// reach the scorer with a disagreement.
fn penalties(
    voice: &Voice,
    attrs: &ParsedAttributes,
    weights: &ScoringWeights,
    graph: &RegionalAccentGraph,
) -> f64 {
    let mut total = 0.0;

    if let (Some(wanted), Some(actual)) = (attrs.age_bracket, voice.age_bracket) {
        if wanted != actual {
            total += weights.age_mismatch_penalty;
        }
    }

    if let (Some(wanted), Some(actual)) = (attrs.gender, voice.gender) {
        if actual != Gender::Neutral && actual != wanted {
            total += weights.gender_mismatch_penalty;
        }
    }

    if let Some(wanted) = &attrs.accent {
        match &voice.accent {
            None => total += weights.accent_missing_penalty,
            Some(actual) => {
                if match_accents(graph, wanted, actual) == AccentMatch::Mismatch {
                    total += weights.accent_mismatch_penalty;
                }
            }
        }
    }

    total
}

fn structured_bonuses(
    voice: &Voice,
    attrs: &ParsedAttributes,
    weights: &ScoringWeights,
    graph: &RegionalAccentGraph,
    description: &str,
    details: &mut MatchDetails,
) -> f64 {
    let mut subtotal = 0.0;

    if let (Some(wanted), Some(actual)) = (&attrs.accent, &voice.accent) {
        let bonus = match match_accents(graph, wanted, actual) {
            AccentMatch::Exact => weights.accent_exact_bonus,
            AccentMatch::Regional => weights.accent_regional_bonus,
            AccentMatch::Compound => weights.accent_compound_bonus,
            AccentMatch::Mismatch => 0.0,
        };
        if bonus > 0.0 {
            subtotal += bonus;
            details.accent_match = true;
        }
    }

    if let (Some(wanted), Some(actual)) = (attrs.gender, voice.gender) {
        if wanted == actual {
            subtotal += weights.gender_match_bonus;
            details.gender_match = true;
        }
    }

    if let Some(wanted) = attrs.age_bracket {
        match voice.age_bracket {
            Some(actual) if actual == wanted => {
                subtotal += weights.age_match_bonus;
                details.age_match = true;
            }
            None => {
                // No bracket label; fall back to age wording in the
                // description at reduced value.
                if vocab::age_from_phrases(description) == Some(wanted) {
                    subtotal += weights.age_inferred_bonus;
                    details.age_match = true;
                }
            }
            Some(_) => {}
        }
    }

    subtotal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use calliope_types::AgeBracket;

    fn graph() -> &'static RegionalAccentGraph {
        RegionalAccentGraph::global()
    }

    fn base_voice(id: &str) -> Voice {
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
    fn default_weights_preserve_ordering() {
        assert!(ScoringWeights::default().ordering_holds());
    }

    #[test]
    fn weights_round_trip_through_serde() {
        let weights = ScoringWeights::default();
        let json = serde_json::to_string(&weights).unwrap();
        let back: ScoringWeights = serde_json::from_str(&json).unwrap();
        assert!(back.ordering_holds());
        assert_eq!(back.gender_mismatch_penalty, weights.gender_mismatch_penalty);
    }

    #[test]
    fn exact_accent_outscores_regional() {
        let weights = ScoringWeights::default();
        let attrs = extract("a ukrainian storyteller");

        let mut exact = base_voice("exact");
        exact.accent = Some("Ukrainian".to_string());
        let mut regional = base_voice("regional");
        regional.accent = Some("Russian".to_string());

        let (exact_score, exact_details) = score_candidate(&exact, &attrs, &weights, graph());
        let (regional_score, regional_details) =
            score_candidate(&regional, &attrs, &weights, graph());

        assert!(exact_score > regional_score);
        assert!(regional_score > 0.0);
        assert!(exact_details.accent_match);
        assert!(regional_details.accent_match);
    }

    #[test]
    fn gender_mismatch_dominates_keyword_overlap() {
        let weights = ScoringWeights::default();
        let attrs = extract("a confident female voice, deep and warm");

        let mut wrong_gender = base_voice("wrong");
        wrong_gender.gender = Some(Gender::Male);
        wrong_gender.timbre_tags = vec!["deep".to_string()];
        wrong_gender.tone_words = vec!["confident".to_string(), "warm".to_string()];
        wrong_gender.description = Some("a deep warm confident voice".to_string());

        let right_gender = {
            let mut v = base_voice("right");
            v.gender = Some(Gender::Female);
            v
        };

        let (wrong_score, _) = score_candidate(&wrong_gender, &attrs, &weights, graph());
        let (right_score, _) = score_candidate(&right_gender, &attrs, &weights, graph());
        assert!(right_score > wrong_score);
        assert!(wrong_score < 0.0);
    }

    #[test]
    fn structured_labels_dominate_free_text() {
        let weights = ScoringWeights::default();
        let attrs = extract("an older british woman");

        let mut labeled = base_voice("labeled");
        labeled.accent = Some("British".to_string());
        labeled.gender = Some(Gender::Female);
        labeled.age_bracket = Some(AgeBracket::Older);

        let mut texty = base_voice("texty");
        texty.description =
            Some("an older british woman with an older british woman's voice".to_string());

        let (labeled_score, _) = score_candidate(&labeled, &attrs, &weights, graph());
        let (texty_score, _) = score_candidate(&texty, &attrs, &weights, graph());
        assert!(labeled_score > texty_score * 2.0);
    }

    #[test]
    fn strong_timbre_words_earn_extra() {
        let weights = ScoringWeights::default();

        let mut raspy = base_voice("raspy");
        raspy.timbre_tags = vec!["raspy".to_string()];
        let mut clear = base_voice("clear");
        clear.timbre_tags = vec!["clear".to_string()];

        let (raspy_score, raspy_details) =
            score_candidate(&raspy, &extract("a raspy voice"), &weights, graph());
        let (clear_score, _) =
            score_candidate(&clear, &extract("a clear voice"), &weights, graph());
        assert!(raspy_score > clear_score);
        assert_eq!(raspy_details.matched_tags, vec!["raspy"]);
    }

    #[test]
    fn tone_synonym_scores_below_direct() {
        let weights = ScoringWeights::default();
        let attrs = extract("a confident narrator");

        let mut direct = base_voice("direct");
        direct.tone_words = vec!["confident".to_string()];
        let mut synonym = base_voice("synonym");
        synonym.tone_words = vec!["authoritative".to_string()];

        let (direct_score, _) = score_candidate(&direct, &attrs, &weights, graph());
        let (synonym_score, synonym_details) =
            score_candidate(&synonym, &attrs, &weights, graph());
        assert!(direct_score > synonym_score);
        assert!(synonym_score > 0.0);
        assert_eq!(synonym_details.matched_tones, vec!["confident"]);
    }

    #[test]
    fn character_tiers_descend() {
        let weights = ScoringWeights::default();
        let attrs = extract("a pirate voice");

        let mut tagged = base_voice("tagged");
        tagged.use_cases = vec!["pirate".to_string()];
        let mut described = base_voice("described");
        described.description = Some("an old pirate of the high seas".to_string());
        let mut partial = base_voice("partial");
        partial.description = Some("piratecore adventures".to_string());

        let (tag_score, _) = score_candidate(&tagged, &attrs, &weights, graph());
        let (desc_score, _) = score_candidate(&described, &attrs, &weights, graph());
        let (partial_score, _) = score_candidate(&partial, &attrs, &weights, graph());
        assert!(tag_score > desc_score);
        assert!(desc_score > partial_score);
    }

    #[test]
    fn generic_noun_skipped_on_age_contradiction() {
        let weights = ScoringWeights::default();
        // Query wants young; candidate description says elderly. The word
        // "man" must not reinforce this candidate.
        let attrs = extract("a young man");

        let mut elderly = base_voice("elderly");
        elderly.description = Some("an elderly man with stories to tell".to_string());

        let (_, details) = score_candidate(&elderly, &attrs, &weights, graph());
        assert!(!details.matched_keywords.contains(&"man".to_string()));
    }

    #[test]
    fn quality_and_source_bonuses_are_small() {
        let weights = ScoringWeights::default();
        let attrs = extract("any voice at all");

        let mut high = base_voice("high");
        high.quality_tier = QualityTier::High;
        high.source_provider = SourceProvider::ElevenLabs;
        let standard = base_voice("standard");

        let (high_score, _) = score_candidate(&high, &attrs, &weights, graph());
        let (standard_score, _) = score_candidate(&standard, &attrs, &weights, graph());
        let delta = high_score - standard_score;
        assert!(delta > 0.0);
        assert!(delta < weights.accent_regional_bonus);
    }
}
