//! Vocabulary tables and catalog-derived index for the Calliope matching
//! engine.
//!
//! The word lists that drive attribute extraction live here as one
//! versioned set of static tables, consumed by the single extractor in
//! `calliope-match`. Keeping them in one place avoids the drift that comes
//! from re-implementing near-identical matcher lists per call site.
//!
//! `VocabularyIndex` is the dynamic half: the set of accent, tag, and tone
//! values actually present in a catalog snapshot. Extraction recognizes
//! terms from the static tables; the index is what lets the engine refuse
//! to invent a match for an attribute the catalog cannot satisfy.

mod index;
mod tables;

pub use index::VocabularyIndex;
pub use tables::{
    age_from_phrases, bucket_age, canonical_demonym, character_role, contains_phrase,
    find_demonym, find_phrase, is_american_cue, is_compoundable_demonym, is_generic_noun,
    is_stop_word, is_strong_timbre, is_timbre_word, is_tone_word, noun_gender,
    tones_are_synonyms, AGE_PHRASES, DEMONYMS, STOP_WORDS, TIMBRE_WORDS, TONE_SYNONYMS,
    TONE_WORDS,
};
