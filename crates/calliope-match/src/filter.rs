//! Candidate pre-filter.
//!
//! Cheaply eliminates candidates that cannot satisfy hard constraints
//! before any scoring happens. Pure: no side effects, no allocation beyond
//! the surviving reference list.

use crate::accent::{match_accents, AccentMatch, RegionalAccentGraph};
use calliope_types::{Gender, ParsedAttributes, Voice};
use calliope_vocab as vocab;

/// How a candidate satisfies a character/profession constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharacterMatch {
    /// The role appears verbatim as a candidate tag or use case.
    Tag,
    /// The role appears as a whole word in the name or description.
    Description,
    /// The role appears only as a loose substring ("pirates").
    Partial,
}

/// Returns the strongest way `voice` satisfies the character term, if any.
pub(crate) fn character_match(voice: &Voice, role: &str) -> Option<CharacterMatch> {
    let tag_hit = voice
        .timbre_tags
        .iter()
        .chain(voice.use_cases.iter())
        .any(|tag| tag.trim().eq_ignore_ascii_case(role));
    if tag_hit {
        return Some(CharacterMatch::Tag);
    }

    let name = voice.display_name.to_lowercase();
    let description = voice
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    if vocab::contains_phrase(&name, role) || vocab::contains_phrase(&description, role) {
        return Some(CharacterMatch::Description);
    }
    if name.contains(role) || description.contains(role) {
        return Some(CharacterMatch::Partial);
    }
    None
}

/// Applies the hard constraints. All rules must pass; absence of a query
/// constraint always passes.
///
/// - Age: exact bracket equality.
/// - Gender: equality; `Neutral` candidates survive only when
///   `strict_gender` is false. A candidate with no gender label is
///   unconstrained and passes.
/// - Accent: exact or regionally-similar per the accent graph (exclusions
///   apply); a candidate with no accent fails a query that specified one.
/// - Character: the candidate must mention the term somewhere — enforced
///   whenever the query extracted one, because character queries are
///   semantically narrow.
pub fn pre_filter<'a>(
    voices: impl IntoIterator<Item = &'a Voice>,
    attrs: &ParsedAttributes,
    strict_gender: bool,
    graph: &RegionalAccentGraph,
) -> Vec<&'a Voice> {
    voices
        .into_iter()
        .filter(|voice| passes(voice, attrs, strict_gender, graph))
        .collect()
}

fn passes(
    voice: &Voice,
    attrs: &ParsedAttributes,
    strict_gender: bool,
    graph: &RegionalAccentGraph,
) -> bool {
    if let (Some(wanted), Some(actual)) = (attrs.age_bracket, voice.age_bracket) {
        if wanted != actual {
            return false;
        }
    }

    if let Some(wanted) = attrs.gender {
        match voice.gender {
            Some(actual) if actual == wanted => {}
            Some(Gender::Neutral) if !strict_gender => {}
            Some(_) => return false,
            None => {}
        }
    }

    if let Some(wanted) = &attrs.accent {
        match &voice.accent {
            None => return false,
            Some(actual) => {
                if match_accents(graph, wanted, actual) == AccentMatch::Mismatch {
                    return false;
                }
            }
        }
    }

    if let Some(role) = &attrs.character {
        if character_match(voice, role).is_none() {
            return false;
        }
    }

    true
}
