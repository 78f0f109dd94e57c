//! Voice attribute matching and ranking engine for the Calliope platform.
//!
//! Given a free-text description of a desired voice and a catalog of
//! candidates, returns a ranked, confidence-gated list of the best
//! matches — or an empty result when no candidate is trustworthy enough,
//! which is a first-class outcome the caller must handle, not an error.
//!
//! The pipeline: attribute extraction → accent satisfiability check →
//! hard-constraint pre-filter → penalty/bonus scoring → ranking with a
//! query-dependent confidence gate. The regional accent graph and the
//! vocabulary tables are static and read-only; every call is a pure
//! computation over the snapshot it is handed.

pub mod accent;
pub mod engine;
pub mod extract;
pub mod filter;
pub mod rank;
pub mod score;

pub use accent::{match_accents, normalize_accent, AccentMatch, RegionalAccentGraph};
pub use engine::{match_voices, match_voices_with, MatchOptions};
pub use extract::extract;
pub use filter::pre_filter;
pub use rank::rank_and_gate;
pub use score::{score_candidate, ScoringWeights};
