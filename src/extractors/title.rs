// src/extractors/title.rs
use crate::extractors::remove_span;
use crate::respec::models::Document;
use once_cell::sync::Lazy;
use serde_json::Value;

// A level-one heading: exactly one '#', then a space, then the title text
static TITLE_RE: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"(?mR)^# (.+)$").expect("Failed to compile TITLE_RE")
});

/// Ensures `doc.metadata["title"]` is set.
///
/// An existing title is left alone. Otherwise the first level-one heading
/// becomes the title and its line is removed from the body. With no such
/// heading the title is set to "" and a warning is logged.
///
/// Returns true when a title was taken from the body.
pub fn resolve_title(doc: &mut Document) -> bool {
    if doc.metadata.contains_key("title") {
        tracing::debug!("Title supplied by metadata, not searching the body");
        return false;
    }

    let found = TITLE_RE
        .captures(&doc.content)
        .and_then(|caps| Some((caps.get(0)?.range(), caps.get(1)?.as_str().trim().to_string())));

    match found {
        Some((line, title)) => {
            tracing::debug!("Found title in Markdown: '{}'", title);
            doc.content = remove_span(&doc.content, line);
            doc.metadata.insert("title".into(), Value::String(title));
            true
        }
        None => {
            tracing::warn!("Unable to find title in Markdown or in frontmatter");
            doc.metadata.insert("title".into(), Value::String(String::new()));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::respec::models::Metadata;
    use serde_json::json;

    fn doc(content: &str) -> Document {
        Document::new(content, Metadata::new())
    }

    #[test]
    fn test_only_first_title_heading_is_removed() {
        let mut d = doc("# Title\n\nSome text\n# Not a title");
        assert!(resolve_title(&mut d));
        assert_eq!(d.meta_str("title"), "Title");
        assert_eq!(d.content, "Some text\n# Not a title");
    }

    #[test]
    fn test_deeper_headings_are_not_titles() {
        let mut d = doc("## Abstract\nText\n\n#   Spaced Out   \nMore");
        assert!(resolve_title(&mut d));
        assert_eq!(d.meta_str("title"), "Spaced Out");
        assert_eq!(d.content, "## Abstract\nText\n\n\nMore");
    }

    #[test]
    fn test_missing_title_is_empty_not_an_error() {
        let original = "No headings here.\n\n#hashtag";
        let mut d = doc(original);
        assert!(!resolve_title(&mut d));
        assert_eq!(d.metadata["title"], json!(""));
        assert_eq!(d.content, original);
    }

    #[test]
    fn test_existing_title_wins() {
        let mut metadata = Metadata::new();
        metadata.insert("title".into(), json!("From front-matter"));
        let mut d = Document::new("# From body\n\nText", metadata);

        assert!(!resolve_title(&mut d));
        assert_eq!(d.meta_str("title"), "From front-matter");
        assert_eq!(d.content, "# From body\n\nText");
    }

    #[test]
    fn test_title_with_crlf() {
        let mut d = doc("# Windows Title\r\n\r\nBody\r\n");
        resolve_title(&mut d);
        assert_eq!(d.meta_str("title"), "Windows Title");
        assert_eq!(d.content, "Body");
    }
}
