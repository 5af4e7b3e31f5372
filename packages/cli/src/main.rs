#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the address lookup toolchain.
//!
//! Builds an address index from a CSV extract, shows how a query is
//! interpreted, runs the three lookup surfaces against a built index, and
//! runs the embedded smoke tests.
//!
//! Uses `indicatif-log-bridge` (via [`address_lookup_cli_utils::init_logger`])
//! so log lines and progress bars never fight for the terminal.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use address_lookup_cli_utils::IndicatifProgress;
use address_lookup_index::AddressIndex;
use address_lookup_models::SearchConfig;
use address_lookup_query::street_types::StreetTypeDictionary;
use address_lookup_query::tokenizer::AddressTokenizer;
use address_lookup_search::AddressSearchService;
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Free-text address lookup.
#[derive(Parser)]
#[command(name = "address_lookup")]
#[command(about = "Free-text address lookup over a Tantivy index")]
struct Cli {
    /// Path to a TOML configuration file (default: embedded defaults).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Index directory (overrides the configuration).
    #[arg(long, global = true)]
    index_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Build the index from a CSV address extract.
    Index {
        /// CSV extract to index (default: the bundled sample).
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show the tokens, strategy, plan and sort for a query.
    Parse {
        /// Free-text address query.
        query: String,
    },

    /// Structured field search.
    Addresses {
        /// Free-text address query.
        query: String,

        /// Maximum number of results.
        #[arg(long)]
        size: Option<usize>,
    },

    /// Completion suggest over the one-line address.
    Suggest {
        /// Address prefix.
        query: String,

        /// Maximum number of results.
        #[arg(long)]
        size: Option<usize>,
    },

    /// Structured and suggest search, merged.
    Search {
        /// Free-text address query.
        query: String,

        /// Maximum number of results.
        #[arg(long)]
        size: Option<usize>,
    },

    /// Run the embedded smoke tests against the index.
    Verify,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = address_lookup_cli_utils::init_logger();
    let cli = Cli::parse();

    let config = address_lookup_search::config::load(cli.config.as_deref())?;
    let index_dir = resolve_index_dir(cli.index_dir, &config);

    let dictionary = Arc::new(StreetTypeDictionary::with_extra(&config.extra_street_types));

    match cli.command {
        Commands::Index { csv } => {
            let csv = csv.unwrap_or_else(sample_csv_path);
            let progress = IndicatifProgress::records_bar(&multi, "Indexing addresses");
            let stats = address_lookup_index::build_index(
                &index_dir,
                &csv,
                config.writer_heap_bytes,
                progress,
            )
            .await?;
            print_json(&stats)?;
        }
        Commands::Parse { query } => {
            let tokenizer = AddressTokenizer::new(dictionary);
            print_json(&address_lookup_search::interpret(&tokenizer, &query))?;
        }
        Commands::Addresses { query, size } => {
            let service = open_service(&index_dir, dictionary, config)?;
            print_json(&service.addresses(&query, size).await?)?;
        }
        Commands::Suggest { query, size } => {
            let service = open_service(&index_dir, dictionary, config)?;
            print_json(&service.suggest(&query, size).await?)?;
        }
        Commands::Search { query, size } => {
            let service = open_service(&index_dir, dictionary, config)?;
            print_json(&service.search(&query, size).await?)?;
        }
        Commands::Verify => {
            let index = AddressIndex::open(&index_dir)?;
            let tokenizer = AddressTokenizer::new(dictionary);

            let report = address_lookup_index::verify::run_smoke_tests(&index, &tokenizer)?;
            for result in &report.results {
                if result.passed {
                    log::info!("  PASS {:?} ({})", result.query, result.strategy);
                } else {
                    log::error!(
                        "  FAIL {:?} ({}): {}",
                        result.query,
                        result.strategy,
                        result.failure_reason.as_deref().unwrap_or("unknown")
                    );
                }
            }
            println!("{}/{} smoke tests passed", report.passed, report.total);

            if !report.all_passed() {
                return Err("smoke tests failed".into());
            }
        }
    }

    Ok(())
}

/// Index directory from the command line, then the configuration, then
/// the workspace default.
fn resolve_index_dir(flag: Option<PathBuf>, config: &SearchConfig) -> PathBuf {
    flag.or_else(|| (!config.index_dir.trim().is_empty()).then(|| PathBuf::from(&config.index_dir)))
        .unwrap_or_else(address_lookup_index::default_index_dir)
}

fn sample_csv_path() -> PathBuf {
    address_lookup_index::project_root()
        .join("packages")
        .join("index")
        .join("data")
        .join("sample_addresses.csv")
}

fn open_service(
    index_dir: &Path,
    dictionary: Arc<StreetTypeDictionary>,
    config: SearchConfig,
) -> Result<AddressSearchService<AddressIndex>, Box<dyn std::error::Error>> {
    if !AddressIndex::is_available(index_dir) {
        return Err(format!(
            "No address index at {}. Run `address_lookup index` first.",
            index_dir.display()
        )
        .into());
    }

    let index = AddressIndex::open(index_dir)?.with_sort_window(config.sort_window);
    Ok(AddressSearchService::with_dictionary(index, dictionary, config))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
