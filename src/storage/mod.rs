// src/storage/mod.rs
use crate::utils::error::StorageError;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

#[derive(Debug, Clone)]
pub struct StorageManager {
    root: PathBuf,
}

impl StorageManager {
    /// Creates a StorageManager rooted at an existing file or directory
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        if !root.exists() {
            return Err(StorageError::NotFound(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists Markdown files under the root, sorted.
    ///
    /// A path is skipped when `ignore` matches at the start of it.
    pub fn markdown_files(&self, ignore: Option<&Regex>) -> Result<Vec<PathBuf>, StorageError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }

            let path = without_cur_dir(entry.into_path());
            if let Some(re) = ignore {
                if re.find(&path.to_string_lossy()).is_some_and(|m| m.start() == 0) {
                    tracing::debug!("Ignoring {}", path.display());
                    continue;
                }
            }
            files.push(path);
        }

        files.sort();
        tracing::debug!("Found {} Markdown files under {}", files.len(), self.root.display());
        Ok(files)
    }

    /// Writes the generated HTML next to its Markdown source
    pub async fn save_html(&self, markdown_file: &Path, html: &str) -> Result<PathBuf, StorageError> {
        let html_file = html_path_for(markdown_file);
        tokio::fs::write(&html_file, html).await?;
        tracing::debug!("Saved {} bytes to {}", html.len(), html_file.display());
        Ok(html_file)
    }
}

// Walking "." yields "./docs/a.md"; ignore patterns and logs expect "docs/a.md"
fn without_cur_dir(path: PathBuf) -> PathBuf {
    let relative = path.strip_prefix(".").ok().map(Path::to_path_buf);
    relative.unwrap_or(path)
}

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// `docs/spec.md` becomes `docs/spec.html`; a README becomes `index.html`.
pub fn html_path_for(markdown_file: &Path) -> PathBuf {
    let stem = markdown_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = if stem == "README" {
        "index.html".to_string()
    } else {
        format!("{}.html", stem)
    };
    markdown_file.with_file_name(name)
}
