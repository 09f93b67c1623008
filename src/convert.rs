// src/convert.rs
use crate::respec::{self, models::MetadataDefaults};
use crate::storage::StorageManager;
use crate::utils::AppError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// (markdown source, generated html)
    pub converted: Vec<(PathBuf, PathBuf)>,
    pub failed: Vec<(PathBuf, AppError)>,
    /// Tasks that panicked or were cancelled.
    pub aborted: usize,
}

impl ConversionReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.aborted == 0
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len() + self.aborted
    }
}

/// Converts one Markdown file and writes the HTML beside it.
pub async fn convert(
    storage: &StorageManager,
    markdown_file: &Path,
    defaults: &MetadataDefaults,
) -> Result<PathBuf, AppError> {
    let html = respec::respec(markdown_file, defaults).await?;
    Ok(storage.save_html(markdown_file, &html).await?)
}

/// Converts every file on its own task. Documents share no state, so the
/// order of completion does not matter; results are reported sorted.
pub async fn convert_all(
    storage: Arc<StorageManager>,
    files: Vec<PathBuf>,
    defaults: Arc<MetadataDefaults>,
) -> ConversionReport {
    let mut tasks = JoinSet::new();
    for file in files {
        let storage = Arc::clone(&storage);
        let defaults = Arc::clone(&defaults);
        tasks.spawn(async move {
            let result = convert(&storage, &file, &defaults).await;
            (file, result)
        });
    }

    let mut report = ConversionReport::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((file, Ok(html_file))) => {
                tracing::info!("converted {} to {}", file.display(), html_file.display());
                report.converted.push((file, html_file));
            }
            Ok((file, Err(e))) => {
                tracing::error!("Unable to convert {}: {}", file.display(), e);
                report.failed.push((file, e));
            }
            Err(e) => {
                tracing::error!("Conversion task did not finish: {}", e);
                report.aborted += 1;
            }
        }
    }

    report.converted.sort();
    report.failed.sort_by(|a, b| a.0.cmp(&b.0));
    report
}
