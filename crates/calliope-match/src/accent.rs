//! Regional accent similarity graph.
//!
//! Decides, for two accent labels, whether they are identical, regionally
//! similar (fallback match), or forbidden from matching. The graph has two
//! edge types with a strict precedence rule: **exclusion edges are checked
//! first, unconditionally**, before any similarity or cluster lookup.
//! Without that rule, naive word overlap would cross-match unrelated
//! regions ("US Southern" and "South African" share "south").
//!
//! Compound accents (hyphen-joined, e.g. "indian-american") bypass the
//! graph entirely: every constituent word must individually match between
//! query and candidate, so a compound never degrades into a partial match
//! against one of its parts.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// How a query accent relates to a candidate accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentMatch {
    /// Normalized labels are identical.
    Exact,
    /// Labels are distinct but regionally similar per the graph.
    Regional,
    /// Both sides are/interact with a compound label and all constituent
    /// words matched.
    Compound,
    /// No match. Exclusions land here regardless of apparent similarity.
    Mismatch,
}

/// Similarity clusters. Every label in a cluster is regionally similar to
/// every other label in the same cluster; the cluster name itself is a
/// member so it can be used directly as a query term.
const CLUSTERS: &[(&str, &[&str])] = &[
    (
        "south asian",
        &["indian", "pakistani", "bangladeshi", "sri lankan", "nepali"],
    ),
    (
        "eastern european",
        &[
            "russian",
            "ukrainian",
            "polish",
            "czech",
            "slovak",
            "hungarian",
            "romanian",
            "bulgarian",
            "serbian",
            "croatian",
        ],
    ),
    (
        "east asian",
        &["chinese", "japanese", "korean", "taiwanese", "asian"],
    ),
    (
        "southeast asian",
        &[
            "vietnamese",
            "thai",
            "filipino",
            "indonesian",
            "malaysian",
            "singaporean",
            "asian",
        ],
    ),
    (
        "scandinavian",
        &["swedish", "norwegian", "danish", "finnish", "icelandic"],
    ),
    ("british isles", &["british", "scottish", "irish", "welsh"]),
    ("oceanian", &["australian", "new zealand"]),
    (
        "latin american",
        &[
            "mexican",
            "colombian",
            "argentinian",
            "brazilian",
            "chilean",
            "peruvian",
            "venezuelan",
            "cuban",
            "puerto rican",
        ],
    ),
    ("caribbean", &["jamaican", "cuban", "puerto rican"]),
    (
        "african",
        &["nigerian", "kenyan", "ghanaian", "ethiopian", "south african"],
    ),
    (
        "middle eastern",
        &[
            "arabic", "egyptian", "moroccan", "lebanese", "israeli", "turkish", "persian",
            "saudi",
        ],
    ),
    (
        "western european",
        &["german", "french", "dutch", "belgian", "swiss", "austrian"],
    ),
    (
        "southern european",
        &["italian", "spanish", "portuguese", "greek"],
    ),
    (
        "american regional",
        &[
            "american",
            "canadian",
            "southern american",
            "new york",
            "boston",
            "midwestern",
            "californian",
        ],
    ),
];

/// Forbidden pairs. These override any similarity the clusters (or future
/// cluster edits) would imply, and are stored symmetrically.
const EXCLUSIONS: &[(&str, &str)] = &[
    // Shared "south" substring, unrelated regions.
    ("southern american", "south african"),
    // Shared "new" prefix, unrelated regions.
    ("new york", "new zealand"),
    // One letter apart, different continents.
    ("austrian", "australian"),
];

/// The similarity relation over accent labels.
///
/// Static and read-only after construction; safe for unlimited concurrent
/// reads.
#[derive(Debug)]
pub struct RegionalAccentGraph {
    similar: HashMap<String, HashSet<String>>,
    excluded: HashMap<String, HashSet<String>>,
}

static GRAPH: Lazy<RegionalAccentGraph> = Lazy::new(RegionalAccentGraph::build);

impl RegionalAccentGraph {
    /// The process-wide graph instance.
    pub fn global() -> &'static RegionalAccentGraph {
        &GRAPH
    }

    fn build() -> Self {
        let mut similar: HashMap<String, HashSet<String>> = HashMap::new();
        for &(name, members) in CLUSTERS {
            let mut full: Vec<&str> = members.to_vec();
            full.push(name);
            for a in &full {
                for b in &full {
                    if a != b {
                        similar
                            .entry((*a).to_string())
                            .or_default()
                            .insert((*b).to_string());
                    }
                }
            }
        }

        let mut excluded: HashMap<String, HashSet<String>> = HashMap::new();
        for &(a, b) in EXCLUSIONS {
            excluded
                .entry(a.to_string())
                .or_default()
                .insert(b.to_string());
            excluded
                .entry(b.to_string())
                .or_default()
                .insert(a.to_string());
        }

        Self { similar, excluded }
    }

    /// True if the pair is listed in the exclusion table (either
    /// direction).
    pub fn is_excluded(&self, a: &str, b: &str) -> bool {
        let na = normalize_accent(a);
        let nb = normalize_accent(b);
        self.excluded.get(&na).is_some_and(|set| set.contains(&nb))
    }

    /// The similarity relation:
    ///
    /// 1. normalize both labels;
    /// 2. exclusion table first, unconditionally;
    /// 3. exact normalized match;
    /// 4. similarity-set / cluster membership;
    /// 5. otherwise false.
    pub fn are_similar(&self, a: &str, b: &str) -> bool {
        let na = normalize_accent(a);
        let nb = normalize_accent(b);

        if self.excluded.get(&na).is_some_and(|set| set.contains(&nb)) {
            return false;
        }
        if na == nb {
            return true;
        }
        self.similar.get(&na).is_some_and(|set| set.contains(&nb))
            || self.similar.get(&nb).is_some_and(|set| set.contains(&na))
    }
}

/// Normalizes an accent label: lowercase, trimmed, a trailing "accent"
/// noise word removed, and known spelling/ordering variants collapsed to
/// their canonical form ("US Southern" ≡ "Southern American").
pub fn normalize_accent(label: &str) -> String {
    let mut normalized = label.trim().to_lowercase();
    if let Some(stripped) = normalized.strip_suffix(" accent") {
        normalized = stripped.to_string();
    }
    if let Some(canonical) = calliope_vocab::canonical_demonym(&normalized) {
        return canonical.to_string();
    }
    // Unknown label: collapse space-joined compounds to the hyphenated
    // canonical shape so "Indian American" and "Indian-American" agree.
    if normalized.contains(' ') && normalized.split(' ').count() == 2 {
        let hyphenated = normalized.replace(' ', "-");
        if let Some(canonical) = calliope_vocab::canonical_demonym(&hyphenated) {
            return canonical.to_string();
        }
    }
    normalized
}

/// True if the normalized label is a compound accent ("indian-american").
pub fn is_compound(label: &str) -> bool {
    label.contains('-')
}

/// Full relation between a query accent and a candidate accent, including
/// the compound all-parts rule.
pub fn match_accents(graph: &RegionalAccentGraph, query: &str, candidate: &str) -> AccentMatch {
    let q = normalize_accent(query);
    let c = normalize_accent(candidate);

    if graph.is_excluded(&q, &c) {
        return AccentMatch::Mismatch;
    }
    if q == c {
        return AccentMatch::Exact;
    }
    if is_compound(&q) || is_compound(&c) {
        if compound_parts_match(&q, &c) {
            return AccentMatch::Compound;
        }
        return AccentMatch::Mismatch;
    }
    if graph.are_similar(&q, &c) {
        return AccentMatch::Regional;
    }
    AccentMatch::Mismatch
}

/// All-parts rule for compound labels: every word on each side must have a
/// counterpart on the other (equality or substring containment either
/// way). A partial overlap — "indian-american" against a bare "american" —
/// is rejected.
fn compound_parts_match(a: &str, b: &str) -> bool {
    let parts_a: Vec<&str> = a.split(['-', ' ']).filter(|p| !p.is_empty()).collect();
    let parts_b: Vec<&str> = b.split(['-', ' ']).filter(|p| !p.is_empty()).collect();
    if parts_a.is_empty() || parts_b.is_empty() {
        return false;
    }

    let covered = |xs: &[&str], ys: &[&str]| {
        xs.iter()
            .all(|x| ys.iter().any(|y| x == y || x.contains(y) || y.contains(x)))
    };
    covered(&parts_a, &parts_b) && covered(&parts_b, &parts_a)
}
