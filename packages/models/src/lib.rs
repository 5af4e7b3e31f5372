#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared types for the address lookup query interpreter and index.
//!
//! This crate contains only data types, configuration structs, and simple
//! conversions. It has no heavyweight dependencies (no Tantivy, no I/O).

use serde::{Deserialize, Serialize};

/// The five semantic slots extracted from a free-text address query.
///
/// Every slot is lowercase and trimmed. An absent slot is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddressTokens {
    /// Flat/unit number (the digits before a `/`).
    pub flat_number: String,
    /// Street (house) number.
    pub street_number: String,
    /// Street name, possibly multi-word (e.g., "andrew campbell").
    pub street_name: String,
    /// Recognized street-type word (e.g., "drive").
    pub street_type: String,
    /// Suburb/locality name, possibly multi-word (e.g., "north lakes").
    pub suburb: String,
}

impl ParsedAddressTokens {
    /// Returns `true` if no slot was populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flat_number.is_empty()
            && self.street_number.is_empty()
            && self.street_name.is_empty()
            && self.street_type.is_empty()
            && self.suburb.is_empty()
    }
}

/// A single address record as stored in the index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Persisted address identifier (e.g., `"GAQLD155116960"`).
    pub id: String,
    /// Building name, if any.
    #[serde(default)]
    pub building_name: String,
    /// Flat type (e.g., "unit", "shop").
    #[serde(default)]
    pub flat_type: String,
    /// Flat/unit number.
    #[serde(default)]
    pub flat_number: String,
    /// First (or only) street number.
    #[serde(default)]
    pub number_first: String,
    /// Last street number of a ranged address (e.g., the 7 in "5-7").
    #[serde(default)]
    pub number_last: String,
    /// Street name without its type.
    pub street_name: String,
    /// Street type (e.g., "street", "promenade").
    #[serde(default)]
    pub street_type: String,
    /// Suburb/locality name.
    #[serde(default)]
    pub locality_name: String,
    /// State abbreviation.
    #[serde(default)]
    pub state: String,
    /// Postcode.
    #[serde(default)]
    pub postcode: String,
    /// Latitude (WGS84).
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude (WGS84).
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl AddressRecord {
    /// Renders the record as a single postal address line.
    ///
    /// Format: `[flat/]number[-last] street-name street-type locality state postcode`,
    /// skipping empty parts.
    #[must_use]
    pub fn one_line(&self) -> String {
        let mut number = String::new();
        if !self.flat_number.is_empty() {
            number.push_str(&self.flat_number);
            number.push('/');
        }
        number.push_str(&self.number_first);
        if !self.number_last.is_empty() {
            number.push('-');
            number.push_str(&self.number_last);
        }

        [
            number.as_str(),
            self.street_name.as_str(),
            self.street_type.as_str(),
            self.locality_name.as_str(),
            self.state.as_str(),
            self.postcode.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Which retrieval path produced an [`AddressHit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitOrigin {
    /// Structured multi-field query.
    Structured,
    /// Completion suggester over the one-line address.
    Suggest,
}

/// A scored address returned by the search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressHit {
    /// Persisted identifier, when the retrieval path exposes one.
    pub id: Option<String>,
    /// One-line postal address.
    pub address: String,
    /// Full record, when the retrieval path exposes one.
    pub record: Option<AddressRecord>,
    /// Backend relevance score (higher is better).
    pub score: f32,
    /// Retrieval path that produced this hit.
    pub origin: HitOrigin,
}

impl AddressHit {
    /// Builds a structured-search hit from a full record.
    #[must_use]
    pub fn structured(record: AddressRecord, score: f32) -> Self {
        Self {
            id: (!record.id.is_empty()).then(|| record.id.clone()),
            address: record.one_line(),
            record: Some(record),
            score,
            origin: HitOrigin::Structured,
        }
    }

    /// Builds a completion-suggest hit.
    #[must_use]
    pub fn suggestion(id: Option<String>, address: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.filter(|id| !id.is_empty()),
            address: address.into(),
            record: None,
            score,
            origin: HitOrigin::Suggest,
        }
    }
}

/// Runtime configuration for address lookups.
///
/// Every field has a default so partial TOML files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Directory where the Tantivy index is stored. Empty means the
    /// workspace default.
    #[serde(default)]
    pub index_dir: String,

    /// Memory budget for the Tantivy `IndexWriter` in bytes.
    #[serde(default = "default_writer_heap")]
    pub writer_heap_bytes: usize,

    /// Result count for structured searches when the caller gives none.
    #[serde(default = "default_size")]
    pub default_size: usize,

    /// Result count for suggest searches when the caller gives none.
    #[serde(default = "default_suggest_size")]
    pub default_suggest_size: usize,

    /// Number of top-scoring candidates the sort keys are applied to.
    #[serde(default = "default_sort_window")]
    pub sort_window: usize,

    /// Per-call backend timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after the first failed attempt of a backend call.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff before the first retry; doubles on every further retry.
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,

    /// Street-type words added to the built-in dictionary.
    #[serde(default)]
    pub extra_street_types: Vec<String>,
}

const fn default_writer_heap() -> usize {
    64 * 1024 * 1024 // 64 MB
}

const fn default_size() -> usize {
    20
}

const fn default_suggest_size() -> usize {
    15
}

const fn default_sort_window() -> usize {
    1000
}

const fn default_timeout_ms() -> u64 {
    2_000
}

const fn default_max_retries() -> u32 {
    2
}

const fn default_retry_base_delay_ms() -> u64 {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_dir: String::new(),
            writer_heap_bytes: default_writer_heap(),
            default_size: default_size(),
            default_suggest_size: default_suggest_size(),
            sort_window: default_sort_window(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            extra_street_types: Vec::new(),
        }
    }
}

/// Statistics about a built address index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Total number of documents in the index.
    pub total_documents: u64,
    /// Number of input rows skipped as unusable.
    pub skipped_rows: u64,
    /// Index size on disk in bytes (zero for in-memory indexes).
    pub index_size_bytes: u64,
    /// Time taken to build the index in seconds.
    pub build_time_secs: f64,
}
