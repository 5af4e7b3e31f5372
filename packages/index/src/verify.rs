//! Smoke test runner for the address index.
//!
//! Loads queries from the embedded `smoke_tests.toml` file, runs each one
//! through the tokenizer and plan builder, and checks that the expected
//! address id is among the top structured results.

use address_lookup_query::plan::{PlannedQuery, Strategy};
use address_lookup_query::tokenizer::AddressTokenizer;
use serde::Deserialize;

use crate::{AddressIndex, AddressIndexError};

/// Embedded smoke test configuration (compiled into the binary).
const SMOKE_TESTS_TOML: &str = include_str!("../smoke_tests.toml");

/// Parsed smoke test configuration.
#[derive(Debug, Deserialize)]
struct SmokeTestConfig {
    /// How many top results the expected id may appear in.
    default_top_n: usize,
    /// Individual test cases.
    tests: Vec<SmokeTestEntry>,
}

/// A single smoke test entry from the TOML file.
#[derive(Debug, Deserialize)]
struct SmokeTestEntry {
    /// Free-text query.
    query: String,
    /// Address id that must be returned.
    expected_id: String,
    /// Optional per-test override of `default_top_n`.
    top_n: Option<usize>,
}

/// Result of a single smoke test.
#[derive(Debug)]
pub struct SmokeTestResult {
    /// The query that was searched.
    pub query: String,
    /// Expected address id.
    pub expected_id: String,
    /// Strategy the plan builder chose.
    pub strategy: Strategy,
    /// Ids returned, best first.
    pub matched_ids: Vec<String>,
    /// Number of top results considered.
    pub top_n: usize,
    /// Whether the test passed.
    pub passed: bool,
    /// Reason for failure (if any).
    pub failure_reason: Option<String>,
}

/// Aggregate report from running all smoke tests.
#[derive(Debug)]
pub struct SmokeTestReport {
    /// Individual test results.
    pub results: Vec<SmokeTestResult>,
    /// Number of tests that passed.
    pub passed: usize,
    /// Total number of tests.
    pub total: usize,
}

impl SmokeTestReport {
    /// Returns `true` if all tests passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Runs all smoke tests against the given index.
///
/// # Errors
///
/// Returns an error if the TOML configuration cannot be parsed or
/// a search operation fails due to index corruption.
pub fn run_smoke_tests(
    index: &AddressIndex,
    tokenizer: &AddressTokenizer,
) -> Result<SmokeTestReport, AddressIndexError> {
    let config: SmokeTestConfig = toml::from_str(SMOKE_TESTS_TOML)?;

    let mut results = Vec::with_capacity(config.tests.len());
    for entry in &config.tests {
        let top_n = entry.top_n.unwrap_or(config.default_top_n);
        results.push(run_single_test(index, tokenizer, entry, top_n)?);
    }

    let passed = results.iter().filter(|r| r.passed).count();
    let total = results.len();

    Ok(SmokeTestReport {
        results,
        passed,
        total,
    })
}

fn run_single_test(
    index: &AddressIndex,
    tokenizer: &AddressTokenizer,
    entry: &SmokeTestEntry,
    top_n: usize,
) -> Result<SmokeTestResult, AddressIndexError> {
    let tokens = tokenizer.tokenize(&entry.query);
    let planned = PlannedQuery::new(&tokens);

    let hits = index.search_sync(&planned.query, &planned.sort, top_n)?;
    let matched_ids: Vec<String> = hits.into_iter().filter_map(|hit| hit.id).collect();

    let passed = matched_ids.iter().any(|id| *id == entry.expected_id);
    let failure_reason = if passed {
        None
    } else if matched_ids.is_empty() {
        Some("no match found".to_string())
    } else {
        Some(format!(
            "expected {} in top {top_n}, got {}",
            entry.expected_id,
            matched_ids.join(", ")
        ))
    };

    Ok(SmokeTestResult {
        query: entry.query.clone(),
        expected_id: entry.expected_id.clone(),
        strategy: planned.strategy,
        matched_ids,
        top_n,
        passed,
        failure_reason,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use address_lookup_query::street_types::StreetTypeDictionary;

    use super::*;
    use crate::SAMPLE_ADDRESSES_CSV;
    use crate::records::records_from_str;

    #[test]
    fn parses_embedded_toml() {
        let config: SmokeTestConfig = toml::from_str(SMOKE_TESTS_TOML).unwrap();
        assert!(config.default_top_n > 0, "default_top_n must be positive");
        assert!(
            !config.tests.is_empty(),
            "smoke_tests.toml must have at least one test"
        );
        for test in &config.tests {
            assert!(!test.query.trim().is_empty(), "query must not be empty");
            assert!(!test.expected_id.is_empty(), "expected_id must not be empty");
        }
    }

    #[test]
    fn smoke_tests_pass_against_sample_extract() {
        let index = AddressIndex::in_memory(records_from_str(SAMPLE_ADDRESSES_CSV)).unwrap();
        let tokenizer = AddressTokenizer::new(Arc::new(StreetTypeDictionary::default()));

        let report = run_smoke_tests(&index, &tokenizer).unwrap();
        for result in &report.results {
            assert!(
                result.passed,
                "{:?} ({}): {:?}",
                result.query, result.strategy, result.failure_reason
            );
        }
        assert!(report.all_passed());
    }
}
