// src/respec/source.rs
use crate::extractors::trim_blank_edges;
use crate::respec::models::{Document, Metadata};
use crate::utils::error::SourceError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};

// A front-matter fence: three or more dashes alone on a line
static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-{3,}\s*$").expect("Failed to compile BOUNDARY_RE")
});

/// Splits YAML front-matter from the Markdown body.
///
/// Text without an opening fence is all body and yields empty metadata.
pub fn split_front_matter(text: &str) -> Result<(Metadata, String), SourceError> {
    let text = trim_blank_edges(text);
    let text = text.as_str();
    let mut lines = text.split_inclusive('\n');

    let Some(opening) = lines.next() else {
        return Ok((Metadata::new(), String::new()));
    };
    if !BOUNDARY_RE.is_match(opening) {
        return Ok((Metadata::new(), text.to_string()));
    }

    let mut offset = opening.len();
    for line in lines {
        if BOUNDARY_RE.is_match(line) {
            let metadata = parse_yaml(&text[opening.len()..offset])?;
            let body = trim_blank_edges(&text[offset + line.len()..]);
            return Ok((metadata, body));
        }
        offset += line.len();
    }

    Err(SourceError::UnclosedFrontMatter)
}

fn parse_yaml(yaml: &str) -> Result<Metadata, SourceError> {
    if yaml.trim().is_empty() {
        return Ok(Metadata::new());
    }
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Metadata::new()),
        _ => Err(SourceError::FrontMatterNotMapping),
    }
}

/// Path of the JSON config that sits next to a Markdown file.
pub fn sidecar_path(markdown_file: &Path) -> PathBuf {
    markdown_file.with_extension("json")
}

/// Loads the JSON sidecar config for `markdown_file`.
pub async fn load_sidecar(markdown_file: &Path) -> Result<Metadata, SourceError> {
    let path = sidecar_path(markdown_file);
    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SourceError::SidecarNotFound(path));
        }
        Err(source) => return Err(SourceError::Io { path, source }),
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => {
            tracing::debug!("Loaded {} keys from external config {}", map.len(), path.display());
            Ok(map)
        }
        Ok(_) => Err(SourceError::SidecarNotObject(path)),
        Err(source) => Err(SourceError::SidecarParse { path, source }),
    }
}

/// Reads a Markdown file into a Document.
///
/// Front-matter supplies the metadata; when it is absent or empty the
/// JSON sidecar is required instead.
pub async fn load_document(markdown_file: &Path) -> Result<Document, SourceError> {
    let text = tokio::fs::read_to_string(markdown_file)
        .await
        .map_err(|source| SourceError::Io {
            path: markdown_file.to_path_buf(),
            source,
        })?;

    let (mut metadata, content) = split_front_matter(&text)?;
    if metadata.is_empty() {
        tracing::debug!("No front-matter in {}, looking for external config", markdown_file.display());
        metadata = load_sidecar(markdown_file).await?;
    }

    Ok(Document::new(content, metadata))
}
