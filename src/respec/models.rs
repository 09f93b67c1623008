// src/respec/models.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default location of the ReSpec W3C profile script.
pub const DEFAULT_RESPEC_JS: &str = "https://www.w3.org/Tools/respec/respec-w3c";

/// Key/value configuration handed to ReSpec as `respecConfig`.
pub type Metadata = serde_json::Map<String, Value>;

/// A Markdown body plus the metadata collected for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub content: String,
    pub metadata: Metadata,
}

impl Document {
    pub fn new(content: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// String value of a metadata key, or "" when absent or not a string.
    pub fn meta_str(&self, key: &str) -> &str {
        self.metadata.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

/// A named section that is lifted out of the body into metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Exact heading text, e.g. "Abstract".
    pub heading: &'static str,
    /// Metadata key the trimmed body is stored under.
    pub key: &'static str,
}

impl Section {
    pub const ABSTRACT: Section = Section { heading: "Abstract", key: "abstract" };
    pub const CONFORMANCE: Section = Section { heading: "Conformance", key: "conformance" };
    pub const STATUS: Section = Section { heading: "Status of this Document", key: "sotd" };

    /// Every recognized section, in pipeline order.
    pub const ALL: [Section; 3] = [Self::ABSTRACT, Self::CONFORMANCE, Self::STATUS];
}

/// Fallback values ReSpec needs before it will render.
///
/// Each field is resolved on its own at call time; `None` means "use the
/// built-in default", never "leave unset".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataDefaults {
    pub respec_js: Option<String>,
    pub logos: Option<Vec<Value>>,
    pub authors: Option<Vec<Value>>,
}

impl MetadataDefaults {
    pub fn respec_js(&self) -> Value {
        Value::String(self.respec_js.clone().unwrap_or_else(|| DEFAULT_RESPEC_JS.to_string()))
    }

    pub fn logos(&self) -> Value {
        Value::Array(self.logos.clone().unwrap_or_default())
    }

    pub fn authors(&self) -> Value {
        Value::Array(self.authors.clone().unwrap_or_default())
    }

    /// Inserts every default whose key is missing from `metadata`.
    pub fn fill(&self, metadata: &mut Metadata) {
        metadata.entry("respec_js").or_insert_with(|| self.respec_js());
        metadata.entry("logos").or_insert_with(|| self.logos());
        metadata.entry("authors").or_insert_with(|| self.authors());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_fill_only_missing_keys() {
        let mut metadata = Metadata::new();
        metadata.insert("authors".into(), json!([{ "name": "Ada" }]));

        MetadataDefaults::default().fill(&mut metadata);

        assert_eq!(metadata["respec_js"], json!(DEFAULT_RESPEC_JS));
        assert_eq!(metadata["logos"], json!([]));
        assert_eq!(metadata["authors"], json!([{ "name": "Ada" }]));
    }

    #[test]
    fn test_defaults_do_not_leak_between_calls() {
        let defaults = MetadataDefaults::default();
        let mut first = Metadata::new();
        defaults.fill(&mut first);
        if let Some(Value::Array(logos)) = first.get_mut("logos") {
            logos.push(json!("mutated"));
        }

        let mut second = Metadata::new();
        defaults.fill(&mut second);
        assert_eq!(second["logos"], json!([]));
    }

    #[test]
    fn test_custom_respec_js() {
        let defaults = MetadataDefaults {
            respec_js: Some("respec.js".into()),
            ..Default::default()
        };
        let mut metadata = Metadata::new();
        defaults.fill(&mut metadata);
        assert_eq!(metadata["respec_js"], json!("respec.js"));
    }
}
