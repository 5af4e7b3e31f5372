#![allow(clippy::too_many_lines)]
//! Street-type dictionary and known-suffix matcher.
//!
//! The dictionary is built once at startup and never mutated, so it is
//! shared between queries behind an `Arc` without any locking.
//!
//! Matching is substring-based: a street-type word is found anywhere in the
//! query, not only on word boundaries. This means "road" is found inside
//! "roadster" and the tokenizer will split there. That recall-over-precision
//! behaviour is kept as is.

/// Built-in Australian street-type words (distinct `street_type_code`
/// values from the G-NAF address extract).
pub const STREET_TYPES: &[&str] = &[
    "access",
    "alley",
    "amble",
    "approach",
    "arcade",
    "arterial",
    "avenue",
    "banan",
    "bank",
    "bay",
    "beach",
    "bend",
    "boardwalk",
    "boulevard",
    "boulevarde",
    "bowl",
    "brace",
    "brae",
    "break",
    "broadway",
    "brow",
    "busway",
    "bypass",
    "causeway",
    "centre",
    "centreway",
    "chase",
    "circle",
    "circuit",
    "circus",
    "close",
    "cluster",
    "common",
    "commons",
    "concord",
    "concourse",
    "connection",
    "copse",
    "corner",
    "corso",
    "course",
    "court",
    "courtyard",
    "cove",
    "crescent",
    "crest",
    "crief",
    "cross",
    "crossing",
    "cruiseway",
    "cul-de-sac",
    "cutting",
    "dale",
    "dash",
    "dell",
    "dene",
    "deviation",
    "dip",
    "distributor",
    "divide",
    "dock",
    "domain",
    "down",
    "drive",
    "driveway",
    "easement",
    "edge",
    "elbow",
    "end",
    "entrance",
    "esplanade",
    "estate",
    "expressway",
    "extension",
    "fairway",
    "fireline",
    "firetrack",
    "firetrail",
    "flat",
    "follow",
    "ford",
    "foreshore",
    "fork",
    "freeway",
    "frontage",
    "gap",
    "garden",
    "gardens",
    "gate",
    "gateway",
    "glade",
    "glen",
    "grange",
    "green",
    "grove",
    "gully",
    "harbour",
    "haven",
    "heath",
    "heights",
    "highway",
    "hill",
    "hollow",
    "hub",
    "island",
    "junction",
    "key",
    "keys",
    "landing",
    "lane",
    "laneway",
    "line",
    "link",
    "lookout",
    "loop",
    "lynne",
    "mall",
    "manor",
    "mead",
    "meander",
    "mews",
    "motorway",
    "nook",
    "north",
    "outlet",
    "outlook",
    "parade",
    "park",
    "parkway",
    "pass",
    "passage",
    "path",
    "pathway",
    "place",
    "plaza",
    "pocket",
    "point",
    "port",
    "precinct",
    "promenade",
    "pursuit",
    "quadrant",
    "quay",
    "quays",
    "ramble",
    "ramp",
    "reach",
    "reserve",
    "rest",
    "retreat",
    "return",
    "ride",
    "ridge",
    "rise",
    "rising",
    "river",
    "road",
    "roads",
    "round",
    "route",
    "row",
    "run",
    "serviceway",
    "slope",
    "spur",
    "square",
    "strait",
    "street",
    "strip",
    "subway",
    "tarn",
    "terrace",
    "throughway",
    "top",
    "tor",
    "track",
    "trail",
    "trunkway",
    "turn",
    "twist",
    "vale",
    "valley",
    "view",
    "views",
    "villa",
    "vista",
    "walk",
    "walkway",
    "waters",
    "waterway",
    "way",
    "wharf",
    "woods",
    "wynd",
];

/// Immutable set of lowercase street-type words.
///
/// Entries are kept ordered by length (longest first) and then
/// lexicographically, which is the order [`StreetTypeDictionary::find`]
/// scans them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetTypeDictionary {
    entries: Vec<String>,
}

impl StreetTypeDictionary {
    /// Builds a dictionary from arbitrary words.
    ///
    /// Words are trimmed and lowercased; empty words and duplicates are
    /// dropped.
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        entries.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        entries.dedup();

        Self { entries }
    }

    /// Builds the built-in dictionary extended with `extra` words.
    #[must_use]
    pub fn with_extra<S: AsRef<str>>(extra: &[S]) -> Self {
        Self::new(
            STREET_TYPES
                .iter()
                .map(|w| (*w).to_string())
                .chain(extra.iter().map(|w| w.as_ref().to_string())),
        )
    }

    /// Number of distinct street-type words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `word` is exactly a known street type.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e == word)
    }

    /// Iterates the words in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Finds a street-type word occurring as a substring of `text`.
    ///
    /// `text` is expected to be lowercase already. When several words
    /// occur, the longest wins; among equally long words the one that
    /// starts earliest in `text` wins; any remaining tie goes to the
    /// lexicographically smallest word.
    ///
    /// Returns `None` when no word occurs, which is the normal outcome
    /// for a query that is still being typed.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;

        for entry in &self.entries {
            if let Some((found, _)) = best {
                // Scan order is longest first, so nothing shorter can win.
                if entry.len() < found.len() {
                    break;
                }
            }

            let Some(pos) = text.find(entry.as_str()) else {
                continue;
            };

            match best {
                Some((_, best_pos)) if best_pos <= pos => {}
                _ => best = Some((entry.as_str(), pos)),
            }
        }

        best.map(|(entry, _)| entry)
    }
}

impl Default for StreetTypeDictionary {
    fn default() -> Self {
        Self::new(STREET_TYPES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dictionary_has_all_words() {
        let dict = StreetTypeDictionary::default();
        assert_eq!(dict.len(), STREET_TYPES.len());
        assert!(dict.contains("street"));
        assert!(dict.contains("promenade"));
        assert!(!dict.contains("st"));
    }

    #[test]
    fn builtin_list_is_complete_and_sorted() {
        assert_eq!(STREET_TYPES.len(), 194);
        assert!(STREET_TYPES.windows(2).all(|w| w[0] < w[1]));
        for word in ["access", "cul-de-sac", "cutting", "esplanade", "wynd"] {
            assert!(STREET_TYPES.contains(&word), "{word}");
        }
    }

    #[test]
    fn hyphenated_type_is_found() {
        let dict = StreetTypeDictionary::default();
        assert_eq!(dict.find("5 the cul-de-sac smithfield"), Some("cul-de-sac"));
    }

    #[test]
    fn scan_order_is_longest_then_lexicographic() {
        let dict = StreetTypeDictionary::new(["way", "road", "bay", "avenue", "lane"]);
        let order: Vec<&str> = dict.iter().collect();
        assert_eq!(order, ["avenue", "lane", "road", "bay", "way"]);
    }

    #[test]
    fn normalizes_and_dedups_words() {
        let dict = StreetTypeDictionary::new([" Road ", "road", "", "ROAD"]);
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("road"));
    }

    #[test]
    fn longest_match_wins() {
        let dict = StreetTypeDictionary::default();
        // "cove" and "vale" also occur, but "promenade" is longer.
        assert_eq!(
            dict.find("11 oyster cove promenade helensvale"),
            Some("promenade")
        );
    }

    #[test]
    fn earliest_match_wins_among_equal_length() {
        let dict = StreetTypeDictionary::default();
        // "drive" and "north" are both five letters.
        assert_eq!(dict.find("andrew campbell drive north lakes"), Some("drive"));
        assert_eq!(dict.find("lower red hill road wondai"), Some("hill"));
    }

    #[test]
    fn street_beats_shorter_break_and_beach() {
        let dict = StreetTypeDictionary::default();
        assert_eq!(dict.find("45/15 breaker street main beach"), Some("street"));
    }

    #[test]
    fn matches_inside_longer_words() {
        let dict = StreetTypeDictionary::new(["road"]);
        assert_eq!(dict.find("roadster"), Some("road"));
    }

    #[test]
    fn miss_returns_none() {
        let dict = StreetTypeDictionary::default();
        assert_eq!(dict.find("xyz"), None);
        assert_eq!(dict.find(""), None);
        assert_eq!(StreetTypeDictionary::new(Vec::<String>::new()).find("road"), None);
    }

    #[test]
    fn matching_is_deterministic() {
        let dict = StreetTypeDictionary::default();
        let queries = [
            "lower red hill road wondai",
            "45/15 breaker street main beach",
            "the grove way close",
            "22 break",
        ];
        for query in queries {
            let first = dict.find(query);
            for _ in 0..10 {
                assert_eq!(dict.find(query), first);
            }
            // Construction order must not matter either.
            let reversed =
                StreetTypeDictionary::new(STREET_TYPES.iter().rev().copied());
            assert_eq!(reversed.find(query), first);
        }
    }

    #[test]
    fn extra_words_extend_builtins() {
        let dict = StreetTypeDictionary::with_extra(&["boulevardier"]);
        assert_eq!(dict.len(), STREET_TYPES.len() + 1);
        assert_eq!(dict.find("1 grand boulevardier"), Some("boulevardier"));
    }
}
