// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Errors raised while turning a Markdown file into a Document
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Front-matter is not closed by a '---' line")]
    UnclosedFrontMatter,

    #[error("Invalid YAML front-matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("Front-matter must be a mapping of keys to values")]
    FrontMatterNotMapping,

    #[error("Unable to find external ReSpec config at {}", .0.display())]
    SidecarNotFound(PathBuf),

    #[error("Invalid external ReSpec config at {}: {source}", .path.display())]
    SidecarParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("External ReSpec config at {} must be a JSON object", .0.display())]
    SidecarNotObject(PathBuf),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unable to load document: {0}")]
    Source(#[from] SourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unable to serialize ReSpec config: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Conversion failed: {0}")]
    Processing(String),
}
