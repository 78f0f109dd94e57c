//! Static vocabulary tables.
//!
//! One source of truth for the word lists the extractor and scorer consult.
//! Tables are ordered where order matters (age phrases: most specific
//! first; demonyms: longest phrase first) and are plain data — the logic
//! that consumes them lives in `calliope-match`.

use calliope_types::{AgeBracket, Gender};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Words carrying no attribute signal, filtered before keyword analysis.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "with", "without", "of", "in", "on", "for", "to",
        "from", "by", "at", "as", "is", "are", "was", "be", "has", "have", "had", "who", "that",
        "this", "his", "her", "their", "its", "it", "he", "she", "they", "very", "really",
        "quite", "pretty", "kind", "sort", "bit", "little", "some", "like", "likes", "sounds",
        "sounding", "sound", "voice", "voices", "speaks", "speaking", "talks", "talking",
        "accent", "accented", "style", "want", "need", "looking", "please",
    ]
    .into_iter()
    .collect()
});

/// Demonym and geographic accent vocabulary: surface phrase → canonical
/// accent label. Multi-word phrases and spelling variants map onto one
/// canonical form so the rest of the engine only ever sees canonical labels.
///
/// Matched longest-phrase-first against the lowercased description (see
/// [`find_demonym`]), so "indian american" wins over the bare "indian".
pub static DEMONYMS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut table = vec![
        // Compound forms, both spellings.
        ("african-american", "african-american"),
        ("african american", "african-american"),
        ("indian-american", "indian-american"),
        ("indian american", "indian-american"),
        ("mexican-american", "mexican-american"),
        ("mexican american", "mexican-american"),
        ("asian-american", "asian-american"),
        ("asian american", "asian-american"),
        ("italian-american", "italian-american"),
        ("italian american", "italian-american"),
        ("irish-american", "irish-american"),
        ("irish american", "irish-american"),
        ("korean-american", "korean-american"),
        ("korean american", "korean-american"),
        ("cuban-american", "cuban-american"),
        ("cuban american", "cuban-american"),
        // Regional US variants.
        ("southern american", "southern american"),
        ("american southern", "southern american"),
        ("us southern", "southern american"),
        ("southern us", "southern american"),
        ("deep south", "southern american"),
        ("southern drawl", "southern american"),
        ("texan", "southern american"),
        ("appalachian", "southern american"),
        ("new york", "new york"),
        ("brooklyn", "new york"),
        ("boston", "boston"),
        ("midwestern", "midwestern"),
        ("californian", "californian"),
        // Named clusters usable directly as a query term.
        ("eastern european", "eastern european"),
        ("latin american", "latin american"),
        ("middle eastern", "middle eastern"),
        ("south african", "south african"),
        ("new zealand", "new zealand"),
        ("sri lankan", "sri lankan"),
        ("puerto rican", "puerto rican"),
        // Single-word demonyms.
        ("american", "american"),
        ("canadian", "canadian"),
        ("british", "british"),
        ("english", "british"),
        ("scottish", "scottish"),
        ("irish", "irish"),
        ("welsh", "welsh"),
        ("australian", "australian"),
        ("kiwi", "new zealand"),
        ("indian", "indian"),
        ("pakistani", "pakistani"),
        ("bangladeshi", "bangladeshi"),
        ("nepali", "nepali"),
        ("chinese", "chinese"),
        ("japanese", "japanese"),
        ("korean", "korean"),
        ("taiwanese", "taiwanese"),
        ("vietnamese", "vietnamese"),
        ("thai", "thai"),
        ("filipino", "filipino"),
        ("indonesian", "indonesian"),
        ("malaysian", "malaysian"),
        ("singaporean", "singaporean"),
        ("asian", "asian"),
        ("russian", "russian"),
        ("ukrainian", "ukrainian"),
        ("polish", "polish"),
        ("czech", "czech"),
        ("slovak", "slovak"),
        ("hungarian", "hungarian"),
        ("romanian", "romanian"),
        ("bulgarian", "bulgarian"),
        ("serbian", "serbian"),
        ("croatian", "croatian"),
        ("german", "german"),
        ("french", "french"),
        ("italian", "italian"),
        ("spanish", "spanish"),
        ("portuguese", "portuguese"),
        ("dutch", "dutch"),
        ("belgian", "belgian"),
        ("swiss", "swiss"),
        ("austrian", "austrian"),
        ("greek", "greek"),
        ("swedish", "swedish"),
        ("norwegian", "norwegian"),
        ("danish", "danish"),
        ("finnish", "finnish"),
        ("icelandic", "icelandic"),
        ("scandinavian", "scandinavian"),
        ("nordic", "scandinavian"),
        ("mexican", "mexican"),
        ("colombian", "colombian"),
        ("argentinian", "argentinian"),
        ("brazilian", "brazilian"),
        ("chilean", "chilean"),
        ("peruvian", "peruvian"),
        ("venezuelan", "venezuelan"),
        ("cuban", "cuban"),
        ("hispanic", "latin american"),
        ("caribbean", "caribbean"),
        ("jamaican", "jamaican"),
        ("nigerian", "nigerian"),
        ("kenyan", "kenyan"),
        ("ghanaian", "ghanaian"),
        ("ethiopian", "ethiopian"),
        ("african", "african"),
        ("egyptian", "egyptian"),
        ("moroccan", "moroccan"),
        ("arabic", "arabic"),
        ("arab", "arabic"),
        ("lebanese", "lebanese"),
        ("israeli", "israeli"),
        ("turkish", "turkish"),
        ("persian", "persian"),
        ("iranian", "persian"),
        ("saudi", "saudi"),
    ];
    // Longest surface phrase first so compound forms win over their parts.
    table.sort_by_key(|(phrase, _)| std::cmp::Reverse(phrase.len()));
    table
});

/// Bare demonyms that normalize to their "-American" compound when an
/// American-context cue appears alongside them in the same description.
static COMPOUNDABLE_DEMONYMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "african", "indian", "mexican", "asian", "italian", "irish", "korean", "cuban",
    ]
    .into_iter()
    .collect()
});

/// Context cues that trigger demonym compounding ("Indian" + "American" →
/// "Indian-American").
static AMERICAN_CUES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["american", "us", "usa"].into_iter().collect());

/// Ordered age phrase table, most specific phrase first. The first phrase
/// found in the text wins, so "middle aged" must precede the bare "aged"
/// and "young adult" must precede "young".
pub static AGE_PHRASES: Lazy<Vec<(&'static str, AgeBracket)>> = Lazy::new(|| {
    vec![
        ("middle-aged", AgeBracket::MiddleAged),
        ("middle aged", AgeBracket::MiddleAged),
        ("middle age", AgeBracket::MiddleAged),
        ("young adult", AgeBracket::Young),
        ("grandfather", AgeBracket::Older),
        ("grandmother", AgeBracket::Older),
        ("grandpa", AgeBracket::Older),
        ("grandma", AgeBracket::Older),
        ("elderly", AgeBracket::Older),
        ("senior", AgeBracket::Older),
        ("teenager", AgeBracket::Young),
        ("teenage", AgeBracket::Young),
        ("teen", AgeBracket::Young),
        ("youthful", AgeBracket::Young),
        ("mature", AgeBracket::MiddleAged),
        ("older", AgeBracket::Older),
        ("young", AgeBracket::Young),
        ("aged", AgeBracket::Older),
        ("old", AgeBracket::Older),
    ]
});

/// Gendered nouns that constitute an explicit gender request.
static MALE_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "man", "men", "male", "guy", "gentleman", "boy", "dude", "father", "dad", "grandfather",
        "grandpa", "uncle", "sir",
    ]
    .into_iter()
    .collect()
});

static FEMALE_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "woman", "women", "female", "lady", "girl", "gal", "mother", "mom", "grandmother",
        "grandma", "aunt", "madam",
    ]
    .into_iter()
    .collect()
});

/// Profession/role/archetype roster for character extraction.
static CHARACTER_ROSTER: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "pirate",
        "detective",
        "wizard",
        "witch",
        "vampire",
        "robot",
        "cowboy",
        "knight",
        "king",
        "queen",
        "princess",
        "prince",
        "soldier",
        "general",
        "captain",
        "sergeant",
        "sailor",
        "doctor",
        "nurse",
        "professor",
        "teacher",
        "scientist",
        "lawyer",
        "judge",
        "journalist",
        "reporter",
        "narrator",
        "storyteller",
        "butler",
        "bartender",
        "chef",
        "farmer",
        "fisherman",
        "musician",
        "singer",
        "rapper",
        "poet",
        "actor",
        "comedian",
        "clown",
        "magician",
        "monk",
        "priest",
        "nun",
        "preacher",
        "sheriff",
        "outlaw",
        "gangster",
        "mobster",
        "spy",
        "assassin",
        "ninja",
        "samurai",
        "viking",
        "gladiator",
        "emperor",
        "pharaoh",
        "genie",
        "elf",
        "dwarf",
        "giant",
        "ogre",
        "troll",
        "ghost",
        "zombie",
        "alien",
        "superhero",
        "villain",
        "librarian",
        "surfer",
        "coach",
        "announcer",
        "sportscaster",
        "auctioneer",
        "politician",
        "butcher",
        "blacksmith",
        "innkeeper",
    ]
    .into_iter()
    .collect()
});

/// Compound character mentions normalized to the head role.
static CHARACTER_COMPOUNDS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("jazz musician", "musician"),
        ("rock musician", "musician"),
        ("opera singer", "singer"),
        ("lounge singer", "singer"),
        ("mad scientist", "scientist"),
        ("drill sergeant", "sergeant"),
        ("private detective", "detective"),
        ("police detective", "detective"),
        ("sea captain", "captain"),
        ("ship captain", "captain"),
        ("army general", "general"),
        ("stand-up comedian", "comedian"),
        ("radio announcer", "announcer"),
    ]
});

/// Voice-timbre vocabulary: perceptual qualities of the sound itself.
pub static TIMBRE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "deep", "low", "bass", "baritone", "raspy", "gravelly", "husky", "hoarse", "smoky",
        "smokers", "breathy", "nasal", "high", "squeaky", "soft", "quiet", "loud", "booming",
        "resonant", "rich", "velvety", "silky", "smooth", "rough", "scratchy", "gruff",
        "throaty", "thin", "light", "airy", "crisp", "clear", "mellow",
    ]
    .into_iter()
    .collect()
});

/// Timbre words that are strong perceptual signals and earn a boosted
/// bonus when they line up with a candidate tag.
static STRONG_TIMBRE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["deep", "raspy", "gravelly", "smokers", "hoarse", "husky"]
        .into_iter()
        .collect()
});

/// Tone vocabulary: voice-characteristic descriptors. Deliberately separate
/// from timbre and from communication-style concerns that belong to
/// personality configuration.
pub static TONE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "confident",
        "warm",
        "sassy",
        "friendly",
        "calm",
        "soothing",
        "energetic",
        "upbeat",
        "cheerful",
        "serious",
        "authoritative",
        "professional",
        "casual",
        "playful",
        "flirty",
        "mysterious",
        "dramatic",
        "gentle",
        "kind",
        "stern",
        "excited",
        "relaxed",
        "wise",
        "witty",
        "sarcastic",
        "charming",
        "charismatic",
        "bubbly",
        "bright",
        "sultry",
        "seductive",
        "intense",
        "comforting",
        "reassuring",
        "commanding",
        "bold",
        "shy",
        "timid",
        "sweet",
        "elegant",
        "refined",
        "posh",
        "sophisticated",
    ]
    .into_iter()
    .collect()
});

/// Symmetric tone synonym pairs, granting a reduced bonus for
/// semantic-but-not-literal tone matches.
pub static TONE_SYNONYMS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("confident", "authoritative"),
        ("confident", "commanding"),
        ("confident", "bold"),
        ("warm", "friendly"),
        ("warm", "comforting"),
        ("warm", "kind"),
        ("calm", "soothing"),
        ("calm", "relaxed"),
        ("soothing", "reassuring"),
        ("energetic", "upbeat"),
        ("energetic", "excited"),
        ("cheerful", "upbeat"),
        ("cheerful", "bubbly"),
        ("serious", "stern"),
        ("playful", "witty"),
        ("charming", "charismatic"),
        ("elegant", "refined"),
        ("posh", "sophisticated"),
        ("sultry", "seductive"),
        ("shy", "timid"),
    ]
});

/// Generic person nouns excluded from free-text description matching when
/// they would contradict an already-matched age signal.
static GENERIC_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["man", "woman", "person", "guy", "lady", "speaker"]
        .into_iter()
        .collect()
});

/// True if `word` is in the stop-word list.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Looks up the canonical accent label for a surface phrase, if known.
pub fn canonical_demonym(phrase: &str) -> Option<&'static str> {
    DEMONYMS
        .iter()
        .find(|(surface, _)| *surface == phrase)
        .map(|(_, canonical)| *canonical)
}

/// Finds the first (longest) demonym phrase contained in `text`, matching
/// on word boundaries. Returns the canonical label.
pub fn find_demonym(text: &str) -> Option<&'static str> {
    DEMONYMS
        .iter()
        .find(|(surface, _)| contains_phrase(text, surface))
        .map(|(_, canonical)| *canonical)
}

/// True if the bare demonym participates in "-American" compounding.
pub fn is_compoundable_demonym(label: &str) -> bool {
    COMPOUNDABLE_DEMONYMS.contains(label)
}

/// True if `word` is an American-context cue for demonym compounding.
pub fn is_american_cue(word: &str) -> bool {
    AMERICAN_CUES.contains(word)
}

/// Scans `text` for the first matching age phrase (most specific first).
pub fn age_from_phrases(text: &str) -> Option<AgeBracket> {
    AGE_PHRASES
        .iter()
        .find(|(phrase, _)| contains_phrase(text, phrase))
        .map(|(_, bracket)| *bracket)
}

/// Buckets an explicit numeric age into the catalog's three brackets.
/// Young adults (18–39) fold into `Young`.
pub fn bucket_age(years: u32) -> AgeBracket {
    if years >= 60 {
        AgeBracket::Older
    } else if years >= 40 {
        AgeBracket::MiddleAged
    } else {
        AgeBracket::Young
    }
}

/// Maps an explicit gendered noun to its gender, if it is one.
pub fn noun_gender(word: &str) -> Option<Gender> {
    if MALE_NOUNS.contains(word) {
        Some(Gender::Male)
    } else if FEMALE_NOUNS.contains(word) {
        Some(Gender::Female)
    } else {
        None
    }
}

/// Resolves a character/profession mention in `text`: compound forms first
/// (normalized to the head role), then the bare roster.
pub fn character_role(text: &str, tokens: &[String]) -> Option<&'static str> {
    for &(compound, head) in CHARACTER_COMPOUNDS.iter() {
        if contains_phrase(text, compound) {
            return Some(head);
        }
    }
    for token in tokens {
        if let Some(role) = CHARACTER_ROSTER.get(token.as_str()).copied() {
            return Some(role);
        }
    }
    None
}

/// True if `word` is a voice-timbre descriptor.
pub fn is_timbre_word(word: &str) -> bool {
    TIMBRE_WORDS.contains(word)
}

/// True if `word` is one of the strong perceptual timbre signals.
pub fn is_strong_timbre(word: &str) -> bool {
    STRONG_TIMBRE.contains(word)
}

/// True if `word` is a tone descriptor.
pub fn is_tone_word(word: &str) -> bool {
    TONE_WORDS.contains(word)
}

/// True if two tone words are listed as synonyms (symmetric).
pub fn tones_are_synonyms(a: &str, b: &str) -> bool {
    TONE_SYNONYMS
        .iter()
        .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}

/// True if `word` is a generic person noun.
pub fn is_generic_noun(word: &str) -> bool {
    GENERIC_NOUNS.contains(word)
}

/// Whole-word/phrase containment: `needle` occurs in `haystack` with
/// non-alphanumeric (or string-edge) characters on both sides.
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    find_phrase(haystack, needle).is_some()
}

/// Position of the first whole-word occurrence of `needle` in `haystack`,
/// if any.
pub fn find_phrase(haystack: &str, needle: &str) -> Option<usize> {
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let abs = start + pos;
        let end = abs + needle.len();
        let left_ok = abs == 0
            || !haystack[..abs]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric());
        let right_ok = end == haystack.len()
            || !haystack[end..].chars().next().is_some_and(|c| c.is_alphanumeric());
        if left_ok && right_ok {
            return Some(abs);
        }
        start = abs + 1;
    }
    None
}
