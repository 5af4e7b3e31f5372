#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Tantivy-based address index.
//!
//! In-process full-text index over an address extract, implementing the
//! [`SearchBackend`] contract of `address_lookup_query`.
//!
//! # Architecture
//!
//! - **Index time**: CSV rows are parsed into [`AddressRecord`]s and
//!   written to a Tantivy `MmapDirectory` (or a RAM directory for tests).
//!   Each record is indexed per field and as a one-line address.
//! - **Structured search**: a [`QueryPlan`] is compiled into Tantivy
//!   prefix/fuzzy/term queries; the best-scoring window of candidates is
//!   ordered by the [`SortSpec`] and truncated.
//! - **Completion suggest**: a regex prefix query over the raw lowercase
//!   one-line address.
//!
//! Tantivy searches are synchronous and are dispatched to the blocking
//! thread pool from the async backend methods.
//!
//! # Usage
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use address_lookup_index::AddressIndex;
//! use address_lookup_query::SearchBackend;
//!
//! let index = AddressIndex::open("data/address_index")?;
//! let hits = index.suggest("11 oyster", 15).await?;
//! for hit in hits {
//!     println!("{}", hit.address);
//! }
//! # Ok(())
//! # }
//! ```

pub mod progress;
pub mod query;
pub mod records;
pub mod schema;
pub mod sort;
pub mod verify;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use address_lookup_query::merge::normalize_address;
use address_lookup_query::plan::{QueryPlan, SortSpec};
use address_lookup_query::{BackendError, SearchBackend};
use async_trait::async_trait;
use tantivy::collector::TopDocs;
use tantivy::schema::Value;
use tantivy::tokenizer::TextAnalyzer;
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, Searcher, TantivyDocument};

pub use address_lookup_models::{AddressHit, AddressRecord, IndexStats};
use progress::ProgressCallback;
use schema::AddressFields;

/// Default directory name for the address index under `data/`.
pub const DEFAULT_INDEX_DIR_NAME: &str = "address_index";

/// Number of top-scoring candidates ordered by the sort keys when no
/// other window is configured.
pub const DEFAULT_SORT_WINDOW: usize = 1000;

/// Writer heap used for in-memory indexes.
const IN_MEMORY_WRITER_HEAP: usize = 50_000_000;

/// Bundled sample extract, used by tests and smoke verification.
pub const SAMPLE_ADDRESSES_CSV: &str = include_str!("../data/sample_addresses.csv");

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`.
///
/// # Panics
///
/// Panics if the project root cannot be resolved.
#[must_use]
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("Failed to find project root from CARGO_MANIFEST_DIR")
        .to_path_buf()
}

/// Returns the default path for the address index directory.
#[must_use]
pub fn default_index_dir() -> PathBuf {
    project_root().join("data").join(DEFAULT_INDEX_DIR_NAME)
}

/// Errors from address index operations.
#[derive(Debug, thiserror::Error)]
pub enum AddressIndexError {
    /// Tantivy error.
    #[error("Tantivy error: {0}")]
    Tantivy(#[from] tantivy::TantivyError),

    /// Address extract parsing error.
    #[error("Records error: {0}")]
    Records(#[from] records::RecordsError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Index directory not found.
    #[error("Index directory not found: {0}")]
    IndexNotFound(String),

    /// Async task join error.
    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Smoke test configuration could not be parsed.
    #[error("Failed to parse smoke_tests.toml: {0}")]
    SmokeConfig(#[from] toml::de::Error),
}

impl From<AddressIndexError> for BackendError {
    fn from(e: AddressIndexError) -> Self {
        match e {
            AddressIndexError::Io(e) => Self::Io(e),
            AddressIndexError::Join(e) if e.is_panic() => Self::Other(e.to_string()),
            e @ (AddressIndexError::IndexNotFound(_) | AddressIndexError::Join(_)) => {
                Self::Unavailable(e.to_string())
            }
            AddressIndexError::Tantivy(e) => Self::Query(e.to_string()),
            e => Self::Other(e.to_string()),
        }
    }
}

/// A handle to an opened address index.
///
/// Cloning is cheap: the reader and analyzer are shared handles. The
/// index supports concurrent searches from multiple threads/tasks.
#[derive(Clone)]
pub struct AddressIndex {
    fields: AddressFields,
    reader: IndexReader,
    analyzer: TextAnalyzer,
    sort_window: usize,
}

impl AddressIndex {
    /// Opens an existing address index from a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist or does not
    /// contain a valid Tantivy index.
    pub fn open(index_dir: impl AsRef<Path>) -> Result<Self, AddressIndexError> {
        let index_dir = index_dir.as_ref();
        if !index_dir.exists() {
            return Err(AddressIndexError::IndexNotFound(
                index_dir.display().to_string(),
            ));
        }

        log::info!("Opening address index at {}", index_dir.display());

        let index = Index::open_in_dir(index_dir)?;
        schema::register_tokenizers(&index);

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()?;

        Ok(Self::from_parts(&index, reader))
    }

    /// Builds an index in RAM from the given records.
    ///
    /// # Errors
    ///
    /// Returns an error if a document cannot be written.
    pub fn in_memory(
        records: impl IntoIterator<Item = AddressRecord>,
    ) -> Result<Self, AddressIndexError> {
        let schema = schema::build_schema();
        let index = Index::create_in_ram(schema.clone());
        schema::register_tokenizers(&index);

        let fields = AddressFields::from_schema(&schema);
        let mut writer: IndexWriter = index.writer_with_num_threads(1, IN_MEMORY_WRITER_HEAP)?;
        for record in records {
            writer.add_document(to_document(&fields, &record))?;
        }
        writer.commit()?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        Ok(Self::from_parts(&index, reader))
    }

    fn from_parts(index: &Index, reader: IndexReader) -> Self {
        Self {
            fields: AddressFields::from_schema(&index.schema()),
            reader,
            analyzer: schema::address_analyzer(),
            sort_window: DEFAULT_SORT_WINDOW,
        }
    }

    /// Sets how many top-scoring candidates the sort keys are applied to.
    #[must_use]
    pub fn with_sort_window(mut self, sort_window: usize) -> Self {
        self.sort_window = sort_window;
        self
    }

    /// Number of candidates to collect for a request of `limit` hits.
    ///
    /// The larger of `limit` and the sort window, capped at the document
    /// count. `None` when the index is empty.
    fn candidate_window(&self, searcher: &Searcher, limit: usize) -> Option<usize> {
        let num_docs = usize::try_from(searcher.num_docs()).unwrap_or(usize::MAX);
        let window = limit.max(self.sort_window).min(num_docs);
        (window > 0).then_some(window)
    }

    /// Returns `true` if `index_dir` contains an index.
    #[must_use]
    pub fn is_available(index_dir: &Path) -> bool {
        index_dir.exists() && index_dir.join("meta.json").exists()
    }

    /// Returns the total number of documents in the index.
    #[must_use]
    pub fn num_docs(&self) -> u64 {
        self.reader.searcher().num_docs()
    }

    /// Synchronous structured search.
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails (e.g., index corruption).
    pub fn search_sync(
        &self,
        plan: &QueryPlan,
        sort: &SortSpec,
        limit: usize,
    ) -> Result<Vec<AddressHit>, AddressIndexError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let searcher = self.reader.searcher();
        let Some(window) = self.candidate_window(&searcher, limit) else {
            return Ok(Vec::new());
        };
        let query = query::compile(plan, &self.fields, &self.analyzer);

        let top_docs = searcher.search(&query, &TopDocs::with_limit(window))?;

        let mut records = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            records.push((score, read_record(&doc, &self.fields)));
        }

        sort::sort_records(&mut records, sort);
        records.truncate(limit);

        log::debug!("Structured search returned {} hits", records.len());

        Ok(records
            .into_iter()
            .map(|(score, record)| AddressHit::structured(record, score))
            .collect())
    }

    /// Synchronous completion suggest.
    ///
    /// Completions are ordered alphabetically by address within the
    /// candidate window (the first `max(limit, sort_window)` matching
    /// documents), so on a large index they are not guaranteed to be the
    /// globally first completions.
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails.
    pub fn suggest_sync(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<AddressHit>, AddressIndexError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let searcher = self.reader.searcher();
        let Some(window) = self.candidate_window(&searcher, limit) else {
            return Ok(Vec::new());
        };
        let query = query::compile_suggest(&normalize_address(prefix), &self.fields)?;

        let top_docs = searcher.search(&query, &TopDocs::with_limit(window))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            let id = stored_text(&doc, self.fields.id);
            let address = stored_text(&doc, self.fields.address);
            hits.push(AddressHit::suggestion(Some(id), address, score));
        }

        // Only the collected window is ordered. When more than `window`
        // documents match, later alphabetical completions can be missed.
        hits.sort_by(|a, b| {
            a.address
                .to_lowercase()
                .cmp(&b.address.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(limit);

        Ok(hits)
    }
}

/// Runs a synchronous index operation on the blocking thread pool.
async fn run_blocking<T: Send + 'static>(
    f: impl FnOnce() -> Result<T, AddressIndexError> + Send + 'static,
) -> Result<T, AddressIndexError> {
    tokio::task::spawn_blocking(f).await?
}

#[async_trait]
impl SearchBackend for AddressIndex {
    async fn search(
        &self,
        plan: &QueryPlan,
        sort: &SortSpec,
        limit: usize,
    ) -> Result<Vec<AddressHit>, BackendError> {
        let index = self.clone();
        let plan = plan.clone();
        let sort = sort.clone();

        Ok(run_blocking(move || index.search_sync(&plan, &sort, limit)).await?)
    }

    async fn suggest(&self, prefix: &str, limit: usize) -> Result<Vec<AddressHit>, BackendError> {
        let index = self.clone();
        let prefix = prefix.to_string();

        Ok(run_blocking(move || index.suggest_sync(&prefix, limit)).await?)
    }
}

fn stored_text(doc: &TantivyDocument, field: tantivy::schema::Field) -> String {
    doc.get_first(field)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

fn stored_f64(doc: &TantivyDocument, field: tantivy::schema::Field) -> Option<f64> {
    doc.get_first(field).and_then(|v| v.as_f64())
}

/// Rebuilds an address record from its stored fields.
fn read_record(doc: &TantivyDocument, fields: &AddressFields) -> AddressRecord {
    AddressRecord {
        id: stored_text(doc, fields.id),
        building_name: stored_text(doc, fields.building_name),
        flat_type: stored_text(doc, fields.flat_type),
        flat_number: stored_text(doc, fields.flat_number),
        number_first: stored_text(doc, fields.number_first),
        number_last: stored_text(doc, fields.number_last),
        street_name: stored_text(doc, fields.street_name),
        street_type: stored_text(doc, fields.street_type_code),
        locality_name: stored_text(doc, fields.locality_name),
        state: stored_text(doc, fields.state_abbreviation),
        postcode: stored_text(doc, fields.postcode),
        latitude: stored_f64(doc, fields.latitude),
        longitude: stored_f64(doc, fields.longitude),
    }
}

/// Builds the Tantivy document for one record. Empty values are omitted.
fn to_document(fields: &AddressFields, record: &AddressRecord) -> TantivyDocument {
    let mut doc = TantivyDocument::default();

    let texts = [
        (fields.id, &record.id),
        (fields.building_name, &record.building_name),
        (fields.flat_type, &record.flat_type),
        (fields.flat_number, &record.flat_number),
        (fields.number_first, &record.number_first),
        (fields.number_last, &record.number_last),
        (fields.street_name, &record.street_name),
        (fields.street_type_code, &record.street_type),
        (fields.locality_name, &record.locality_name),
        (fields.state_abbreviation, &record.state),
        (fields.postcode, &record.postcode),
    ];
    for (field, value) in texts {
        if !value.is_empty() {
            doc.add_text(field, value);
        }
    }

    if let Some(lat) = record.latitude {
        doc.add_f64(fields.latitude, lat);
    }
    if let Some(lon) = record.longitude {
        doc.add_f64(fields.longitude, lon);
    }

    let line = record.one_line();
    doc.add_text(fields.address_suggest, normalize_address(&line));
    doc.add_text(fields.address, line);

    doc
}

/// Builds an address index from a CSV extract.
///
/// This is the main entry point for index construction. It:
/// 1. Creates or overwrites the index directory
/// 2. Parses the CSV extract, skipping unusable rows
/// 3. Commits and merges the index
///
/// # Errors
///
/// Returns an error if data parsing or index writing fails.
pub async fn build_index(
    index_dir: &Path,
    csv_path: &Path,
    writer_heap_bytes: usize,
    progress: Arc<dyn ProgressCallback>,
) -> Result<IndexStats, AddressIndexError> {
    let index_dir = index_dir.to_path_buf();
    let csv_path = csv_path.to_path_buf();

    run_blocking(move || {
        build_index_sync(&index_dir, &csv_path, writer_heap_bytes, progress.as_ref())
    })
    .await
}

/// Synchronous index build implementation.
fn build_index_sync(
    index_dir: &Path,
    csv_path: &Path,
    writer_heap_bytes: usize,
    progress: &dyn ProgressCallback,
) -> Result<IndexStats, AddressIndexError> {
    let start = Instant::now();

    if index_dir.exists() {
        log::info!("Removing existing index at {}", index_dir.display());
        std::fs::remove_dir_all(index_dir)?;
    }
    std::fs::create_dir_all(index_dir)?;

    let schema = schema::build_schema();
    let index = Index::create_in_dir(index_dir, schema.clone())?;
    schema::register_tokenizers(&index);

    let mut writer: IndexWriter = index.writer(writer_heap_bytes)?;
    let fields = AddressFields::from_schema(&schema);

    progress.set_message(format!("Indexing {}", csv_path.display()));

    let mut total_count = 0u64;
    let counts = records::parse_file(csv_path, |record| {
        if let Err(e) = writer.add_document(to_document(&fields, &record)) {
            log::trace!("Failed to add document {}: {e}", record.id);
            return;
        }
        total_count += 1;
        progress.inc(1);
        if total_count.is_multiple_of(1_000_000) {
            log::info!("  indexed {total_count} records...");
        }
    })?;

    log::info!("Committing index ({total_count} total documents)...");
    writer.commit()?;

    log::info!("Optimizing index (merging segments)...");
    writer.wait_merging_threads()?;

    let elapsed = start.elapsed();
    let index_size_bytes = dir_size(index_dir).unwrap_or(0);

    #[allow(clippy::cast_precision_loss)]
    let mb = index_size_bytes as f64 / 1_048_576.0;
    log::info!(
        "Index built: {total_count} documents, {} skipped, {mb:.1} MB, {:.1}s",
        counts.skipped,
        elapsed.as_secs_f64()
    );
    progress.finish(format!("Indexed {total_count} addresses"));

    Ok(IndexStats {
        total_documents: total_count,
        skipped_rows: counts.skipped,
        index_size_bytes,
        build_time_secs: elapsed.as_secs_f64(),
    })
}

/// Recursively calculates the total size of a directory.
fn dir_size(path: &Path) -> std::io::Result<u64> {
    let mut total = 0u64;
    if path.is_dir() {
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let ft = entry.file_type()?;
            if ft.is_file() {
                total += entry.metadata()?.len();
            } else if ft.is_dir() {
                total += dir_size(&entry.path())?;
            }
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use address_lookup_models::{HitOrigin, ParsedAddressTokens};
    use address_lookup_query::plan::{FieldClause, FieldName, PlannedQuery};

    use super::*;

    #[derive(Default)]
    struct CountingProgress {
        records: std::sync::atomic::AtomicU64,
        finished: std::sync::Mutex<Option<String>>,
    }

    impl ProgressCallback for CountingProgress {
        fn inc(&self, delta: u64) {
            self.records.fetch_add(delta, std::sync::atomic::Ordering::SeqCst);
        }

        fn set_message(&self, _msg: String) {}

        fn finish(&self, msg: String) {
            *self.finished.lock().unwrap() = Some(msg);
        }
    }

    fn sample_index() -> AddressIndex {
        AddressIndex::in_memory(records::records_from_str(SAMPLE_ADDRESSES_CSV)).unwrap()
    }

    fn ids(hits: &[AddressHit]) -> Vec<&str> {
        hits.iter().map(|h| h.id.as_deref().unwrap_or("-")).collect()
    }

    fn name_only(name: &str) -> (QueryPlan, SortSpec) {
        let tokens = ParsedAddressTokens {
            street_name: name.to_string(),
            ..ParsedAddressTokens::default()
        };
        let planned = PlannedQuery::new(&tokens);
        (planned.query, planned.sort)
    }

    #[test]
    fn in_memory_index_holds_sample() {
        assert_eq!(sample_index().num_docs(), 10);
    }

    #[test]
    fn street_name_prefix_orders_by_number_then_id() {
        let (plan, sort) = name_only("break");
        let hits = sample_index().search_sync(&plan, &sort, 20).unwrap();
        assert_eq!(
            ids(&hits),
            ["GAQLD155116960", "GAQLD155116961", "GAQLD155116962"]
        );
        assert!(hits.iter().all(|h| h.origin == HitOrigin::Structured));
        assert_eq!(
            hits[0].address,
            "45/15 BREAKER STREET MAIN BEACH QLD 4217"
        );
    }

    #[test]
    fn street_numbers_sort_numerically() {
        let (plan, sort) = name_only("smith");
        let hits = sample_index().search_sync(&plan, &sort, 20).unwrap();
        assert_eq!(ids(&hits), ["GAQLD190000007", "GAQLD190000021"]);
    }

    #[test]
    fn multi_clause_plan_narrows_results() {
        let plan = QueryPlan::and(vec![
            FieldClause::prefix(FieldName::StreetNumber, "15"),
            FieldClause::prefix(FieldName::StreetName, "breaker").boosted(2.0),
        ]);
        let sort = SortSpec::for_tokens(&ParsedAddressTokens::default());
        let hits = sample_index().search_sync(&plan, &sort, 20).unwrap();
        assert_eq!(ids(&hits), ["GAQLD155116960", "GAQLD155116961"]);
        let record = hits[0].record.as_ref().unwrap();
        assert_eq!(record.flat_type, "UNIT");
        assert!(record.latitude.is_some());
    }

    #[test]
    fn fuzzy_clause_tolerates_misspelling() {
        let plan = QueryPlan::and(vec![
            FieldClause::prefix(FieldName::StreetName, "andrew").boosted(2.0),
            FieldClause::fuzzy(FieldName::Suburb, "nroth lakes"),
        ]);
        let sort = SortSpec::for_tokens(&ParsedAddressTokens::default());
        let hits = sample_index().search_sync(&plan, &sort, 20).unwrap();
        assert_eq!(ids(&hits), ["GAQLD170000042"]);
    }

    #[test]
    fn match_all_respects_limit() {
        let sort = SortSpec::for_tokens(&ParsedAddressTokens::default());
        let index = sample_index();
        assert_eq!(
            index.search_sync(&QueryPlan::MatchAll, &sort, 3).unwrap().len(),
            3
        );
        assert!(
            index
                .search_sync(&QueryPlan::MatchAll, &sort, 0)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn oversized_limit_is_capped_to_index_size() {
        let index = sample_index();
        let (plan, sort) = name_only("smith");

        let hits = index.search_sync(&plan, &sort, usize::MAX / 4).unwrap();
        assert_eq!(ids(&hits), ["GAQLD190000007", "GAQLD190000021"]);

        let hits = index.suggest_sync("", usize::MAX).unwrap();
        assert_eq!(hits.len(), 10);
    }

    #[test]
    fn empty_index_returns_no_hits() {
        let index = AddressIndex::in_memory(Vec::new()).unwrap();
        let sort = SortSpec::for_tokens(&ParsedAddressTokens::default());
        assert!(index.search_sync(&QueryPlan::MatchAll, &sort, 20).unwrap().is_empty());
        assert!(index.suggest_sync("1", 15).unwrap().is_empty());
    }

    #[tokio::test]
    async fn panicked_task_is_not_transient() {
        let handle: tokio::task::JoinHandle<()> = tokio::task::spawn(async { panic!("boom") });
        let join_error = handle.await.unwrap_err();
        let backend: BackendError = AddressIndexError::Join(join_error).into();
        assert!(matches!(backend, BackendError::Other(_)));
        assert!(!backend.is_transient());
    }

    #[test]
    fn suggest_completes_one_line_address() {
        let index = sample_index();

        let hits = index.suggest_sync("45/15 B", 15).unwrap();
        assert_eq!(ids(&hits), ["GAQLD155116960"]);
        assert_eq!(hits[0].origin, HitOrigin::Suggest);

        let hits = index.suggest_sync("1", 2).unwrap();
        assert_eq!(ids(&hits), ["GAQLD180000100", "GAQLD160000011"]);

        assert!(index.suggest_sync("zzz", 15).unwrap().is_empty());
        assert_eq!(index.suggest_sync("", 3).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn backend_trait_dispatches_to_blocking_search() {
        let index = sample_index();
        let (plan, sort) = name_only("oyster");
        let hits = SearchBackend::search(&index, &plan, &sort, 20).await.unwrap();
        assert_eq!(ids(&hits), ["GAQLD160000011", "GAQLD160000012"]);

        let hits = SearchBackend::suggest(&index, "11 oyster", 15).await.unwrap();
        assert_eq!(ids(&hits), ["GAQLD160000011"]);
    }

    #[test]
    fn missing_index_is_unavailable() {
        let err = AddressIndex::open("/definitely/not/an/index").err().unwrap();
        assert!(matches!(err, AddressIndexError::IndexNotFound(_)));
        let backend: BackendError = err.into();
        assert!(backend.is_transient());
    }

    #[tokio::test]
    async fn build_and_search_with_csv_data() {
        let tmp = std::env::temp_dir().join("address_index_test_csv");
        let _ = std::fs::remove_dir_all(&tmp);
        std::fs::create_dir_all(&tmp).unwrap();

        let csv_path = tmp.join("addresses.csv");
        std::fs::write(&csv_path, SAMPLE_ADDRESSES_CSV).unwrap();

        let index_dir = tmp.join("index");
        let progress = Arc::new(CountingProgress::default());
        let stats = build_index(&index_dir, &csv_path, 50_000_000, progress.clone())
            .await
            .unwrap();

        assert_eq!(stats.total_documents, 10);
        assert_eq!(progress.records.load(std::sync::atomic::Ordering::SeqCst), 10);
        assert_eq!(
            progress.finished.lock().unwrap().as_deref(),
            Some("Indexed 10 addresses")
        );
        assert_eq!(stats.skipped_rows, 1);
        assert!(AddressIndex::is_available(&index_dir));

        let index = AddressIndex::open(&index_dir).unwrap();
        assert_eq!(index.num_docs(), 10);

        let (plan, sort) = name_only("lower red");
        let hits = SearchBackend::search(&index, &plan, &sort, 20).await.unwrap();
        assert_eq!(ids(&hits), ["GAQLD180000100"]);

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
