// src/respec/mod.rs
pub mod html;
pub mod models;
pub mod source;

use crate::extractors::resolve_title;
use crate::utils::AppError;
use models::{Document, MetadataDefaults, Section};
use serde_json::Value;
use std::path::Path;

/// Fills ReSpec defaults, then lifts the title and the named sections out
/// of the body into metadata.
pub fn prepare(mut doc: Document, defaults: &MetadataDefaults) -> Document {
    // ReSpec renders the embedded Markdown itself when told the format
    doc.metadata.insert("format".into(), Value::String("markdown".into()));
    defaults.fill(&mut doc.metadata);

    // Title first so its heading can never terminate a section body
    resolve_title(&mut doc);
    for section in Section::ALL {
        section.extract(&mut doc);
    }
    doc
}

/// Generates ReSpec HTML for a Markdown file.
pub async fn respec(markdown_file: &Path, defaults: &MetadataDefaults) -> Result<String, AppError> {
    let doc = source::load_document(markdown_file).await?;
    let doc = prepare(doc, defaults);
    Ok(html::render(&doc)?)
}
