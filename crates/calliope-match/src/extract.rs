//! Attribute extraction from free-text voice descriptions.
//!
//! Turns a description like "old Indian-American man, deep raspy voice"
//! into a `ParsedAttributes` value. Extraction never fails: absence of a
//! signal simply leaves the corresponding field unset. Input length is
//! unbounded — accuracy is per-token, so longer descriptions are accepted
//! as-is rather than truncated.

use calliope_types::{AgeBracket, Gender, ParsedAttributes};
use calliope_vocab as vocab;
use std::collections::{HashMap, HashSet};

/// Extracts structured attributes from a raw description.
pub fn extract(description: &str) -> ParsedAttributes {
    let text = normalize_text(description);
    let tokens = tokenize(&text);

    let keywords = keyword_list(&tokens);
    let phrases = phrase_list(&tokens);

    ParsedAttributes {
        accent: extract_accent(&text, &tokens),
        gender: extract_gender(&tokens),
        age_bracket: extract_age(&text, &tokens),
        character: vocab::character_role(&text, &tokens).map(str::to_string),
        timbre: dedup_filter(&tokens, |t| vocab::is_timbre_word(t)),
        tones: dedup_filter(&tokens, |t| vocab::is_tone_word(t)),
        keywords,
        phrases,
    }
}

/// Lowercases and strips apostrophes so "Smoker's" tokenizes as "smokers".
fn normalize_text(description: &str) -> String {
    description
        .to_lowercase()
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .collect()
}

/// Splits on non-alphanumeric characters, keeping hyphens inside tokens so
/// "indian-american" and "70-year-old" survive as units.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '-')
        .map(|t| t.trim_matches('-'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stop-word-filtered tokens with at least one letter, deduplicated in
/// first-seen order.
fn keyword_list(tokens: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|t| !vocab::is_stop_word(t))
        .filter(|t| t.chars().any(|c| c.is_alphabetic()))
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// 2- and 3-gram phrases over the raw token sequence. Grams made entirely
/// of stop words carry no signal and are skipped.
fn phrase_list(tokens: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut phrases = Vec::new();
    for n in [2usize, 3] {
        for window in tokens.windows(n) {
            if window.iter().all(|t| vocab::is_stop_word(t)) {
                continue;
            }
            let phrase = window.join(" ");
            if seen.insert(phrase.clone()) {
                phrases.push(phrase);
            }
        }
    }
    phrases
}

fn dedup_filter(tokens: &[String], keep: impl Fn(&str) -> bool) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|t| keep(t))
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// Accent term extraction with demonym compounding.
///
/// All demonym phrases occurring in the text are collected with their
/// positions. A compound canonical ("indian-american") wins outright.
/// Otherwise, a bare compoundable demonym that co-occurs with an American
/// cue is normalized to its compound form — this happens here, before any
/// filtering or scoring sees the accent. Failing both, the leftmost
/// demonym wins.
fn extract_accent(text: &str, tokens: &[String]) -> Option<String> {
    let mut found: HashMap<&'static str, usize> = HashMap::new();
    for &(surface, canonical) in vocab::DEMONYMS.iter() {
        if let Some(pos) = vocab::find_phrase(text, surface) {
            let entry = found.entry(canonical).or_insert(pos);
            if pos < *entry {
                *entry = pos;
            }
        }
    }
    if found.is_empty() {
        return None;
    }

    if let Some((compound, _)) = found
        .iter()
        .filter(|(label, _)| label.contains('-'))
        .min_by_key(|(_, pos)| **pos)
    {
        return Some((*compound).to_string());
    }

    let has_cue =
        tokens.iter().any(|t| vocab::is_american_cue(t)) || found.contains_key("american");
    if has_cue {
        if let Some((label, _)) = found
            .iter()
            .filter(|(label, _)| vocab::is_compoundable_demonym(label))
            .min_by_key(|(_, pos)| **pos)
        {
            return Some(format!("{}-american", label));
        }
    }

    found
        .iter()
        .min_by_key(|(_, pos)| **pos)
        .map(|(label, _)| (*label).to_string())
}

/// First explicit gendered noun wins; absence leaves the query
/// unconstrained (never `Neutral`).
fn extract_gender(tokens: &[String]) -> Option<Gender> {
    tokens.iter().find_map(|t| vocab::noun_gender(t))
}

/// Explicit "N-year-old" / "N years old" patterns first (bucketed
/// numerically), then the ordered age-phrase table.
fn extract_age(text: &str, tokens: &[String]) -> Option<AgeBracket> {
    if let Some(years) = explicit_age(tokens) {
        return Some(vocab::bucket_age(years));
    }
    vocab::age_from_phrases(text)
}

fn explicit_age(tokens: &[String]) -> Option<u32> {
    for (i, token) in tokens.iter().enumerate() {
        // Hyphenated form: "70-year-old".
        let parts: Vec<&str> = token.split('-').collect();
        if parts.len() >= 2 {
            if let Ok(years) = parts[0].parse::<u32>() {
                if parts[1..].iter().any(|p| matches!(*p, "year" | "years" | "yr" | "yrs"))
                    && plausible_age(years)
                {
                    return Some(years);
                }
            }
        }

        // Spaced form: "70 years old" / "70 year old".
        if let Ok(years) = token.parse::<u32>() {
            let next = tokens.get(i + 1).map(String::as_str);
            let after = tokens.get(i + 2).map(String::as_str);
            let is_year = matches!(next, Some("year" | "years" | "yr" | "yrs"));
            let is_old = matches!(after, Some("old"));
            if is_year && is_old && plausible_age(years) {
                return Some(years);
            }
        }
    }
    None
}

fn plausible_age(years: u32) -> bool {
    (1..=120).contains(&years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_reference_description() {
        let attrs = extract("old Indian-American man, deep raspy voice, sounds like a pirate");
        assert_eq!(attrs.accent.as_deref(), Some("indian-american"));
        assert_eq!(attrs.gender, Some(Gender::Male));
        assert_eq!(attrs.age_bracket, Some(AgeBracket::Older));
        assert_eq!(attrs.character.as_deref(), Some("pirate"));
        assert_eq!(attrs.timbre, vec!["deep", "raspy"]);
    }

    #[test]
    fn empty_description_extracts_nothing() {
        let attrs = extract("");
        assert_eq!(attrs, ParsedAttributes::default());
    }

    #[test]
    fn explicit_numeric_age_buckets() {
        assert_eq!(
            extract("a 72-year-old storyteller").age_bracket,
            Some(AgeBracket::Older)
        );
        assert_eq!(
            extract("45 years old, calm").age_bracket,
            Some(AgeBracket::MiddleAged)
        );
        assert_eq!(
            extract("a 19 year old gamer").age_bracket,
            Some(AgeBracket::Young)
        );
    }

    #[test]
    fn numeric_age_wins_over_phrases() {
        // "young" appears, but the explicit age is authoritative.
        assert_eq!(
            extract("young at heart, 65 years old").age_bracket,
            Some(AgeBracket::Older)
        );
    }

    #[test]
    fn bare_demonym_compounds_with_american_cue() {
        assert_eq!(
            extract("an african guy with an american accent").accent.as_deref(),
            Some("african-american")
        );
        assert_eq!(
            extract("an african storyteller").accent.as_deref(),
            Some("african")
        );
        assert_eq!(
            extract("mexican american woman").accent.as_deref(),
            Some("mexican-american")
        );
    }

    #[test]
    fn gender_from_explicit_nouns_only() {
        assert_eq!(extract("a confident woman").gender, Some(Gender::Female));
        assert_eq!(extract("some guy next door").gender, Some(Gender::Male));
        assert_eq!(extract("a confident narrator").gender, None);
    }

    #[test]
    fn character_compound_normalizes() {
        assert_eq!(
            extract("sounds like a jazz musician").character.as_deref(),
            Some("musician")
        );
    }

    #[test]
    fn timbre_and_tone_do_not_bleed() {
        let attrs = extract("a deep warm voice");
        assert_eq!(attrs.timbre, vec!["deep"]);
        assert_eq!(attrs.tones, vec!["warm"]);
    }

    #[test]
    fn keywords_are_stop_filtered_and_deduped() {
        let attrs = extract("a deep deep voice that sounds like the sea");
        assert!(attrs.keywords.contains(&"deep".to_string()));
        assert!(attrs.keywords.contains(&"sea".to_string()));
        assert_eq!(
            attrs.keywords.iter().filter(|k| *k == "deep").count(),
            1
        );
        assert!(!attrs.keywords.contains(&"voice".to_string()));
    }

    #[test]
    fn phrases_cover_bigrams_and_trigrams() {
        let attrs = extract("smooth jazz musician");
        assert!(attrs.phrases.contains(&"smooth jazz".to_string()));
        assert!(attrs.phrases.contains(&"jazz musician".to_string()));
        assert!(attrs.phrases.contains(&"smooth jazz musician".to_string()));
    }

    #[test]
    fn smokers_voice_tokenizes_despite_apostrophe() {
        let attrs = extract("a smoker's voice");
        assert!(attrs.timbre.contains(&"smokers".to_string()));
    }
}
