// src/extractors/section.rs

// --- Imports ---
use crate::extractors::remove_span;
use crate::respec::models::{Document, Section};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::ops::Range;

// --- Regex Patterns (Lazy Static) ---
// Any line opening with '#' ends the body of the section above it
static NEXT_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^#").expect("Failed to compile NEXT_HEADING_RE")
});

// Extractors for Abstract, Conformance and Status of this Document
static BUILTIN_EXTRACTORS: Lazy<Vec<SectionExtractor>> = Lazy::new(|| {
    Section::ALL
        .iter()
        .map(|section| {
            SectionExtractor::new(section.heading, section.key)
                .expect("Failed to compile built-in section pattern")
        })
        .collect()
});

// --- Data Structures ---

/// Where a single section stands during extraction.
///
/// `NotFound` and `Extracted` are terminal. `Pending` only exists between
/// locating the heading and rewriting the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionState {
    NotFound,
    Pending {
        /// Heading line through the end of the body, terminator excluded.
        span: Range<usize>,
        /// Raw body, untrimmed.
        body: Range<usize>,
    },
    Extracted(String),
}

/// Lifts one named section out of a document body into its metadata.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    heading: String,
    key: String,
    heading_re: Regex,
}

impl SectionExtractor {
    /// Builds an extractor for `## <heading>` lines at any depth.
    /// The heading must fill the rest of its line exactly.
    pub fn new(heading: &str, key: &str) -> Result<Self, regex::Error> {
        let heading_re = Regex::new(&format!(r"(?mR)^#+ {}$", regex::escape(heading)))?;
        Ok(Self {
            heading: heading.to_string(),
            key: key.to_string(),
            heading_re,
        })
    }

    /// Finds the first matching heading and the body that follows it.
    pub fn locate(&self, content: &str) -> SectionState {
        let Some(heading) = self.heading_re.find(content) else {
            return SectionState::NotFound;
        };

        // Body stops at the nearest following heading line, or the end of the text
        let end = NEXT_HEADING_RE
            .find_at(content, heading.end())
            .map_or(content.len(), |m| m.start());

        tracing::trace!(
            "Located '{}' heading at {}..{}, body ends at {}",
            self.heading,
            heading.start(),
            heading.end(),
            end
        );

        SectionState::Pending {
            span: heading.start()..end,
            body: heading.end()..end,
        }
    }

    /// Moves the section body into `doc.metadata[key]` and deletes the
    /// heading and body from `doc.content`.
    ///
    /// Returns `None` without touching the document when the key is
    /// already set. A missing section stores an empty string.
    pub fn extract(&self, doc: &mut Document) -> Option<SectionState> {
        if doc.metadata.contains_key(&self.key) {
            tracing::debug!("'{}' already set in metadata, leaving '{}' section in place", self.key, self.heading);
            return None;
        }

        let state = match self.locate(&doc.content) {
            SectionState::Pending { span, body } => {
                let text = doc.content[body].trim().to_string();
                doc.content = remove_span(&doc.content, span);
                SectionState::Extracted(text)
            }
            other => other,
        };

        let value = match &state {
            SectionState::Extracted(text) => {
                tracing::debug!("Extracted '{}' section ({} bytes)", self.heading, text.len());
                text.clone()
            }
            _ => {
                tracing::debug!("No '{}' section found", self.heading);
                String::new()
            }
        };
        doc.metadata.insert(self.key.clone(), Value::String(value));

        Some(state)
    }
}

impl Section {
    /// Runs the shared extractor for this section.
    pub fn extract(self, doc: &mut Document) -> Option<SectionState> {
        if let Some(extractor) = BUILTIN_EXTRACTORS.iter().find(|e| e.key == self.key && e.heading == self.heading) {
            return extractor.extract(doc);
        }
        match SectionExtractor::new(self.heading, self.key) {
            Ok(extractor) => extractor.extract(doc),
            Err(e) => {
                tracing::warn!("Cannot build extractor for '{}': {}", self.heading, e);
                None
            }
        }
    }
}
