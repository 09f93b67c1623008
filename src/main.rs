// src/main.rs
mod convert;
mod extractors;
mod respec;
mod storage;
mod utils;

use clap::Parser;
use regex::Regex;
use respec::models::MetadataDefaults;
use std::path::PathBuf;
use std::sync::Arc;
use storage::StorageManager;
use utils::AppError;

/// Convert specifications written in Markdown to ReSpec HTML
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File or directory to search for Markdown files
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip Markdown files whose path matches this regex (anchored at the start)
    #[arg(long)]
    ignore: Option<String>,

    /// ReSpec script used when a document does not set `respec_js`
    #[arg(long, env = "RESPEC_JS")]
    respec_js: Option<String>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments, then set up logging
    let args = Args::parse();
    utils::logging::setup_logging(args.verbose);
    tracing::debug!("Starting with args: {:?}", args);

    // 2. Build configuration
    let ignore = args
        .ignore
        .as_deref()
        .map(Regex::new)
        .transpose()
        .map_err(|e| AppError::Config(format!("Invalid --ignore pattern: {}", e)))?;

    let defaults = MetadataDefaults {
        respec_js: args.respec_js,
        ..Default::default()
    };
    tracing::debug!("Metadata defaults: {}", serde_json::to_string(&defaults)?);

    // 3. Find Markdown files
    let storage = StorageManager::new(&args.path)?;
    let files = storage.markdown_files(ignore.as_ref())?;
    tracing::info!("Found {} Markdown files under {}", files.len(), storage.root().display());

    if files.is_empty() {
        tracing::warn!("Nothing to convert");
        return Ok(());
    }

    // 4. Convert each file
    let report = convert::convert_all(Arc::new(storage), files, Arc::new(defaults)).await;

    tracing::info!(
        "Processing finished. Converted: {}, Failures: {}",
        report.converted.len(),
        report.failure_count()
    );

    if !report.is_success() {
        return Err(AppError::Processing(format!(
            "{} of {} Markdown files could not be converted",
            report.failure_count(),
            report.failure_count() + report.converted.len()
        )));
    }

    Ok(())
}
