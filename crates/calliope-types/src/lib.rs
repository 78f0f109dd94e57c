//! Shared types for the Calliope voice matching engine.
//!
//! This crate provides the foundational types used across all Calliope
//! crates: the catalog `Voice` entry, the categorical label enums
//! (`Gender`, `AgeBracket`, `QualityTier`, `SourceProvider`), and the
//! per-query value types (`ParsedAttributes`, `MatchResult`,
//! `MatchDetails`).
//!
//! No crate in the workspace depends on anything *except* `calliope-types`
//! for cross-cutting type definitions. This keeps the dependency graph
//! clean and prevents circular dependencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod matching;
mod voice;

pub use matching::{MatchDetails, MatchResult, ParsedAttributes};
pub use voice::{InvalidVoice, Voice};

/// Gender label carried by a catalog voice or extracted from a query.
///
/// `Neutral` is a property candidates may have; a *query* never defaults
/// to it — absence of a gender cue leaves the query unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "neutral" => Ok(Gender::Neutral),
            _ => Err(format!("unknown gender label: {}", s)),
        }
    }
}

/// Coarse age bracket of a voice.
///
/// Catalogs tag voices with one of three brackets; explicit numeric ages in
/// a query are bucketed into the same three values (young adults fold into
/// `Young`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeBracket {
    Young,
    MiddleAged,
    Older,
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeBracket::Young => write!(f, "young"),
            AgeBracket::MiddleAged => write!(f, "middle-aged"),
            AgeBracket::Older => write!(f, "older"),
        }
    }
}

impl FromStr for AgeBracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "young" => Ok(AgeBracket::Young),
            "middle-aged" => Ok(AgeBracket::MiddleAged),
            "older" => Ok(AgeBracket::Older),
            _ => Err(format!("unknown age bracket: {}", s)),
        }
    }
}

/// Upstream provider a catalog voice originated from.
///
/// Used only as a quality tie-break signal during ranking; it never affects
/// which candidates are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceProvider {
    ElevenLabs,
    Azure,
    Community,
}

impl SourceProvider {
    /// Returns the string label for this provider.
    pub fn label(self) -> &'static str {
        match self {
            SourceProvider::ElevenLabs => "elevenlabs",
            SourceProvider::Azure => "azure",
            SourceProvider::Community => "community",
        }
    }
}

/// Curation tier of a catalog voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    /// Professionally curated, preferred on score ties.
    High,
    /// Standard catalog entry.
    Standard,
}
