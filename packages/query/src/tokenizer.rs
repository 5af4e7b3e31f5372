//! Address tokenizer.
//!
//! Splits a raw, possibly half-typed query into the five slots of
//! [`ParsedAddressTokens`]:
//!
//! ```text
//! [flat number]/[street number] [street name] [street type] [suburb]
//! ```
//!
//! Examples:
//!
//! - `"45/15 breaker street main beach"` → flat 45, number 15, name
//!   "breaker", type "street", suburb "main beach"
//! - `"22/"` → flat 22 and nothing else (a unit address being typed)
//! - `"andrew campbell drive north lakes"` → name "andrew campbell",
//!   type "drive", suburb "north lakes"

use std::sync::{Arc, LazyLock};

use address_lookup_models::ParsedAddressTokens;
use regex::Regex;

use crate::street_types::StreetTypeDictionary;

/// Leading digits, optional `/`, optional digits, optional single
/// whitespace, then the free-text tail.
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(\d+)?(/)?(\d+)?\s?(.*)$").expect("valid regex"));

/// Splits raw queries into [`ParsedAddressTokens`].
///
/// Holds a shared, read-only [`StreetTypeDictionary`]; cloning the
/// tokenizer only bumps the `Arc`.
#[derive(Debug, Clone)]
pub struct AddressTokenizer {
    dictionary: Arc<StreetTypeDictionary>,
}

impl AddressTokenizer {
    /// Creates a tokenizer backed by `dictionary`.
    #[must_use]
    pub const fn new(dictionary: Arc<StreetTypeDictionary>) -> Self {
        Self { dictionary }
    }

    /// The street-type dictionary this tokenizer matches against.
    #[must_use]
    pub fn dictionary(&self) -> &StreetTypeDictionary {
        &self.dictionary
    }

    /// Tokenizes a raw query.
    ///
    /// Never fails: an empty or unrecognizable query yields empty slots
    /// (or a lone street name), which the plan builder turns into a
    /// match-all or a street-name prefix search.
    #[must_use]
    pub fn tokenize(&self, raw: &str) -> ParsedAddressTokens {
        let search = raw.trim().to_lowercase();

        let (flat, number, rest) = split_numbers(&search);

        let (street_name, street_type, suburb) = match self.dictionary.find(&search) {
            Some(street_type) => {
                let (before, after) = rest.split_once(street_type).unwrap_or((rest, ""));
                if before.trim().is_empty() {
                    // e.g. "22 break": the dictionary word is the start of
                    // the street name itself, not a type suffix.
                    (street_type, "", after)
                } else {
                    (before, street_type, after)
                }
            }
            None => (rest, "", ""),
        };

        let tokens = ParsedAddressTokens {
            flat_number: flat.trim().to_string(),
            street_number: number.trim().to_string(),
            street_name: street_name.trim().to_string(),
            street_type: street_type.trim().to_string(),
            suburb: suburb.trim().to_string(),
        };

        log::debug!("Tokenized {raw:?} into {tokens:?}");

        tokens
    }
}

/// Splits the leading `flat/number` digits off the query.
///
/// Returns `(flat, number, rest)`. Without a `/` the leading digits are
/// the street number; with a `/` they are the flat number and the digits
/// after the `/` (if typed yet) are the street number.
fn split_numbers(search: &str) -> (&str, &str, &str) {
    let Some(caps) = ADDRESS_RE.captures(search) else {
        return ("", "", search);
    };

    let lead = caps.get(1).map_or("", |m| m.as_str());
    let trailing = caps.get(3).map_or("", |m| m.as_str());
    let rest = caps.get(4).map_or("", |m| m.as_str());

    if caps.get(2).is_some() {
        (lead, trailing, rest)
    } else if lead.is_empty() {
        ("", trailing, rest)
    } else {
        ("", lead, rest)
    }
}
