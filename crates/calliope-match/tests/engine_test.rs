//! End-to-end matching behavior over small catalogs.

use calliope_match::{match_voices, match_voices_with, MatchOptions};
use calliope_types::{AgeBracket, Gender, QualityTier, SourceProvider, Voice};

fn voice(id: &str) -> Voice {
    Voice {
        id: id.to_string(),
        display_name: id.to_string(),
        source_provider: SourceProvider::ElevenLabs,
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
fn reference_scenario_returns_the_labeled_candidate_only() {
    let mut labeled = voice("labeled");
    labeled.accent = Some("Indian-American".to_string());
    labeled.gender = Some(Gender::Male);
    labeled.age_bracket = Some(AgeBracket::Older);
    labeled.timbre_tags = vec!["deep".to_string(), "raspy".to_string()];

    let mut plain = voice("plain");
    plain.accent = Some("American".to_string());
    plain.gender = Some(Gender::Male);
    plain.age_bracket = Some(AgeBracket::Older);

    let catalog = vec![plain, labeled];
    let results = match_voices("old Indian-American man, deep raspy voice", &catalog, 5);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].voice.id, "labeled");
    assert!(results[0].details.accent_match);
    assert!(results[0].details.gender_match);
    assert!(results[0].details.age_match);
}

#[test]
fn empty_description_returns_empty() {
    let catalog = vec![voice("a"), voice("b")];
    assert!(match_voices("", &catalog, 5).is_empty());
    assert!(match_voices("   \t ", &catalog, 5).is_empty());
}

#[test]
fn empty_catalog_returns_empty() {
    assert!(match_voices("a deep voice", &[], 5).is_empty());
}

#[test]
fn age_bracket_mismatch_never_appears() {
    let mut young = voice("young");
    young.age_bracket = Some(AgeBracket::Young);
    young.gender = Some(Gender::Male);
    young.timbre_tags = vec!["deep".to_string(), "raspy".to_string()];
    young.description = Some("an old-sounding but young man".to_string());

    let catalog = vec![young];
    let results = match_voices("an old man with a deep raspy voice", &catalog, 5);
    assert!(results.is_empty());
}

#[test]
fn opposite_gender_never_appears_regardless_of_overlap() {
    let mut male = voice("male");
    male.gender = Some(Gender::Male);
    male.tone_words = vec!["confident".to_string()];
    male.description = Some("a confident female-presenting brand voice".to_string());

    let catalog = vec![male];
    let results = match_voices("confident female voice", &catalog, 5);
    assert!(results.is_empty());
}

#[test]
fn neutral_gender_survives_lenient_but_not_strict() {
    let mut neutral = voice("neutral");
    neutral.gender = Some(Gender::Neutral);
    neutral.age_bracket = Some(AgeBracket::Young);
    neutral.tone_words = vec!["warm".to_string(), "friendly".to_string()];

    let catalog = vec![neutral];
    let lenient = match_voices("a warm friendly young woman", &catalog, 5);
    assert_eq!(lenient.len(), 1);

    let strict = match_voices_with(
        "a warm friendly young woman",
        &catalog,
        &MatchOptions {
            strict_gender: true,
            ..Default::default()
        },
    );
    assert!(strict.is_empty());
}

#[test]
fn accent_exclusion_holds_both_ways() {
    let mut southern = voice("southern");
    southern.accent = Some("US Southern".to_string());
    southern.gender = Some(Gender::Male);

    let mut south_african = voice("south-african");
    south_african.accent = Some("South African".to_string());
    south_african.gender = Some(Gender::Male);

    let catalog = vec![southern.clone(), south_african.clone()];

    let results = match_voices("a man with a south african accent", &catalog, 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].voice.id, "south-african");

    let results = match_voices("a man with a us southern accent", &catalog, 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].voice.id, "southern");
}

#[test]
fn regional_fallback_scores_below_exact() {
    let mut russian = voice("russian");
    russian.accent = Some("Russian".to_string());
    let mut polish = voice("polish");
    polish.accent = Some("Polish".to_string());

    let fallback_catalog = vec![russian, polish];
    let fallback = match_voices("a ukrainian accent", &fallback_catalog, 5);
    assert_eq!(fallback.len(), 2);
    assert!(fallback.iter().all(|r| r.details.accent_match));

    let mut ukrainian = voice("ukrainian");
    ukrainian.accent = Some("Ukrainian".to_string());
    let exact_catalog = vec![ukrainian];
    let exact = match_voices("a ukrainian accent", &exact_catalog, 5);
    assert_eq!(exact.len(), 1);

    assert!(exact[0].score > fallback[0].score);
}

#[test]
fn unsatisfiable_accent_short_circuits_to_empty() {
    let mut british = voice("british");
    british.accent = Some("British".to_string());
    let mut japanese = voice("japanese");
    japanese.accent = Some("Japanese".to_string());

    let catalog = vec![british, japanese];
    // No Jamaican in the catalog, and nothing regionally similar to it.
    let results = match_voices("a jamaican storyteller", &catalog, 5);
    assert!(results.is_empty());
}

#[test]
fn character_query_with_no_character_candidates_returns_empty() {
    let mut sailor = voice("sailor");
    sailor.description = Some("a voice of the sea, weathered and salty".to_string());
    let mut narrator = voice("narrator");
    narrator.use_cases = vec!["narration".to_string()];

    let catalog = vec![sailor, narrator];
    let results = match_voices("a pirate voice", &catalog, 5);
    assert!(results.is_empty());
}

#[test]
fn character_query_with_a_tagged_candidate_succeeds() {
    let mut pirate = voice("pirate");
    pirate.use_cases = vec!["pirate".to_string()];
    pirate.timbre_tags = vec!["gravelly".to_string()];

    let catalog = vec![pirate];
    let results = match_voices("a gravelly pirate voice", &catalog, 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].voice.id, "pirate");
}

#[test]
fn weak_incidental_overlap_is_gated_out() {
    let mut mismatched = voice("mismatched");
    mismatched.description = Some("bright cheerful morning radio host".to_string());

    let catalog = vec![mismatched];
    // Only overlap is the incidental word "morning".
    let results = match_voices("a voice for morning announcements", &catalog, 5);
    assert!(results.is_empty());
}

#[test]
fn max_results_bounds_output_not_consideration() {
    let mut best = voice("best");
    best.accent = Some("British".to_string());
    best.gender = Some(Gender::Female);
    let mut second = voice("second");
    second.accent = Some("Scottish".to_string());
    second.gender = Some(Gender::Female);

    // The best candidate sorts first even when it is listed last.
    let catalog = vec![second, best];
    let results = match_voices("a british woman", &catalog, 1);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].voice.id, "best");
}

#[test]
fn invalid_records_are_skipped_not_fatal() {
    let mut invalid = voice("");
    invalid.accent = Some("British".to_string());
    invalid.gender = Some(Gender::Female);

    let mut valid = voice("valid");
    valid.accent = Some("British".to_string());
    valid.gender = Some(Gender::Female);

    let catalog = vec![invalid, valid];
    let results = match_voices("a british woman", &catalog, 5);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].voice.id, "valid");
}

#[test]
fn high_tier_ranks_first_on_equal_labels() {
    let mut standard = voice("standard");
    standard.accent = Some("British".to_string());
    standard.source_provider = SourceProvider::Community;
    let mut premium = voice("premium");
    premium.accent = Some("British".to_string());
    premium.quality_tier = QualityTier::High;
    premium.source_provider = SourceProvider::Community;

    let catalog = vec![standard, premium];
    let results = match_voices("a british voice", &catalog, 5);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].voice.id, "premium");
}
