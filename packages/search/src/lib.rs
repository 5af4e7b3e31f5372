#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Address lookup request orchestration.
//!
//! [`AddressSearchService`] owns the street-type dictionary, tokenizes
//! and plans each query, and dispatches it to a [`SearchBackend`] with a
//! per-call timeout and bounded retries. Three query surfaces are exposed:
//!
//! - [`AddressSearchService::addresses`]: structured field search
//! - [`AddressSearchService::suggest`]: completion over the one-line address
//! - [`AddressSearchService::search`]: both paths concurrently, merged

pub mod config;
pub mod retry;

use std::sync::Arc;
use std::time::Duration;

use address_lookup_models::{AddressHit, ParsedAddressTokens, SearchConfig};
use address_lookup_query::merge::merge;
use address_lookup_query::plan::PlannedQuery;
use address_lookup_query::street_types::StreetTypeDictionary;
use address_lookup_query::tokenizer::AddressTokenizer;
use address_lookup_query::{BackendError, SearchBackend};
use retry::{RetryPolicy, with_retry};
use serde::Serialize;

/// Errors from address lookups.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The backend failed and retrying did not help.
    #[error("{operation} failed: {source}")]
    Backend {
        /// Backend operation that failed.
        operation: &'static str,
        /// Underlying backend error.
        source: BackendError,
    },

    /// Every attempt exceeded the per-call timeout.
    #[error("{operation} timed out after {attempts} attempt(s) of {timeout:?}")]
    Timeout {
        /// Backend operation that timed out.
        operation: &'static str,
        /// Per-attempt timeout.
        timeout: Duration,
        /// Number of attempts made.
        attempts: u32,
    },
}

/// How a raw query was interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretedQuery {
    /// The raw query as given.
    pub raw: String,
    /// Extracted slots.
    pub tokens: ParsedAddressTokens,
    /// Chosen strategy, query plan and sort.
    pub planned: PlannedQuery,
}

/// Free-text address lookup over a search backend.
pub struct AddressSearchService<B> {
    backend: B,
    tokenizer: AddressTokenizer,
    config: SearchConfig,
    policy: RetryPolicy,
}

impl<B: SearchBackend> AddressSearchService<B> {
    /// Creates a service whose dictionary is the built-in street types
    /// plus the configured extras.
    #[must_use]
    pub fn new(backend: B, config: SearchConfig) -> Self {
        let dictionary = StreetTypeDictionary::with_extra(&config.extra_street_types);
        Self::with_dictionary(backend, Arc::new(dictionary), config)
    }

    /// Creates a service sharing an existing dictionary.
    #[must_use]
    pub fn with_dictionary(
        backend: B,
        dictionary: Arc<StreetTypeDictionary>,
        config: SearchConfig,
    ) -> Self {
        log::debug!("Street-type dictionary has {} words", dictionary.len());

        Self {
            backend,
            tokenizer: AddressTokenizer::new(dictionary),
            policy: RetryPolicy::from_config(&config),
            config,
        }
    }

    /// The backend this service dispatches to.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// The tokenizer this service uses.
    #[must_use]
    pub const fn tokenizer(&self) -> &AddressTokenizer {
        &self.tokenizer
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Tokenizes and plans a query without touching the backend.
    #[must_use]
    pub fn interpret(&self, query: &str) -> InterpretedQuery {
        interpret(&self.tokenizer, query)
    }

    /// Structured field search.
    ///
    /// `size` defaults to the configured structured size.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the backend fails or times out after
    /// all retries.
    pub async fn addresses(
        &self,
        query: &str,
        size: Option<usize>,
    ) -> Result<Vec<AddressHit>, SearchError> {
        let interpreted = self.interpret(query);
        let limit = size.unwrap_or(self.config.default_size);

        let hits = self.structured(&interpreted.planned, limit).await?;
        log::debug!("addresses({query:?}) returned {} hits", hits.len());
        Ok(hits)
    }

    /// Completion suggest over the one-line address.
    ///
    /// `size` defaults to the configured suggest size.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the backend fails or times out after
    /// all retries.
    pub async fn suggest(
        &self,
        query: &str,
        size: Option<usize>,
    ) -> Result<Vec<AddressHit>, SearchError> {
        let prefix = suggest_prefix(query);
        let limit = size.unwrap_or(self.config.default_suggest_size);

        let hits = self.completions(&prefix, limit).await?;
        log::debug!("suggest({query:?}) returned {} hits", hits.len());
        Ok(hits)
    }

    /// Runs the structured and suggest paths concurrently and merges them.
    ///
    /// Both paths are asked for `size` hits (default: the configured
    /// structured size) and the merged list is truncated to `size`. If
    /// either path fails, the other is cancelled and the error returned.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if either path fails or times out after
    /// all retries.
    pub async fn search(
        &self,
        query: &str,
        size: Option<usize>,
    ) -> Result<Vec<AddressHit>, SearchError> {
        let interpreted = self.interpret(query);
        let prefix = suggest_prefix(query);
        let limit = size.unwrap_or(self.config.default_size);

        let (structured, suggested) = tokio::try_join!(
            self.structured(&interpreted.planned, limit),
            self.completions(&prefix, limit),
        )?;

        let mut hits = merge(structured, suggested);
        hits.truncate(limit);

        log::debug!("search({query:?}) returned {} merged hits", hits.len());
        Ok(hits)
    }

    async fn structured(
        &self,
        planned: &PlannedQuery,
        limit: usize,
    ) -> Result<Vec<AddressHit>, SearchError> {
        let backend = &self.backend;
        let plan = &planned.query;
        let sort = &planned.sort;

        with_retry("addresses", &self.policy, move || {
            backend.search(plan, sort, limit)
        })
        .await
    }

    async fn completions(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<AddressHit>, SearchError> {
        let backend = &self.backend;

        with_retry("suggest", &self.policy, move || backend.suggest(prefix, limit)).await
    }
}

/// Tokenizes and plans `query` with `tokenizer`.
#[must_use]
pub fn interpret(tokenizer: &AddressTokenizer, query: &str) -> InterpretedQuery {
    let tokens = tokenizer.tokenize(query);
    let planned = PlannedQuery::new(&tokens);
    InterpretedQuery {
        raw: query.to_string(),
        tokens,
        planned,
    }
}

/// Lowercased, whitespace-collapsed query used as the completion prefix.
fn suggest_prefix(query: &str) -> String {
    address_lookup_query::merge::normalize_address(query)
}
