// src/respec/html.rs
use crate::respec::models::Document;

/// Renders a prepared document as a ReSpec HTML page.
///
/// The Markdown body is embedded verbatim; ReSpec renders it in the browser.
pub fn render(doc: &Document) -> Result<String, serde_json::Error> {
    let mut html = head(doc)?;
    html.push_str(&doc.content);
    html.push_str(foot());
    Ok(html)
}

fn head(doc: &Document) -> Result<String, serde_json::Error> {
    let config_json = script_safe(&serde_json::to_string_pretty(&doc.metadata)?);

    // The sections need to be flush left or the Markdown inside them is mangled
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
  <meta charset="utf8">
  <title>{title}</title>
  <script src="{respec_js}" class="remove" defer ></script>
  <script class="remove">
    var respecConfig = {config_json}
  </script>
  </head>
  <body>

<section id="sotd">{sotd}</section>
<section id="abstract">{abstract_}</section>
<section id="conformance">{conformance}</section>

<!-- start of markdown text -->

"#,
        title = escape_html(doc.meta_str("title")),
        respec_js = escape_html(doc.meta_str("respec_js")),
        config_json = config_json,
        sotd = doc.meta_str("sotd"),
        abstract_ = doc.meta_str("abstract"),
        conformance = doc.meta_str("conformance"),
    ))
}

fn foot() -> &'static str {
    r#"

<!-- end of markdown text -->

  </body>
</html>
"#
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// Keeps "</script>" inside JSON strings from closing the config block
fn script_safe(json: &str) -> String {
    json.replace("</", r"<\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::respec::models::Metadata;
    use scraper::{Html, Selector};
    use serde_json::json;

    fn prepared() -> Document {
        let mut metadata = Metadata::new();
        metadata.insert("title".into(), json!("Test <Specification>"));
        metadata.insert("respec_js".into(), json!("https://example.org/respec.js"));
        metadata.insert("abstract".into(), json!("The abstract."));
        metadata.insert("conformance".into(), json!("Conformance text."));
        metadata.insert("sotd".into(), json!("Draft status."));
        metadata.insert("editors".into(), json!([{ "name": "Git Hub Jr" }]));
        metadata.insert("note".into(), json!("ends with </script>"));
        Document::new("## Overview\n\nThis is the overview", metadata)
    }

    fn select_text(doc: &Html, css: &str) -> String {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("missing {}", css))
            .text()
            .collect()
    }

    #[test]
    fn test_render_structure() {
        let html = render(&prepared()).unwrap();
        let page = Html::parse_document(&html);

        assert_eq!(select_text(&page, "title"), "Test <Specification>");
        assert_eq!(select_text(&page, "section#sotd"), "Draft status.");
        assert_eq!(select_text(&page, "section#abstract"), "The abstract.");
        assert_eq!(select_text(&page, "section#conformance"), "Conformance text.");

        let script = Selector::parse("script[src]").unwrap();
        let src = page.select(&script).next().unwrap().value().attr("src");
        assert_eq!(src, Some("https://example.org/respec.js"));
    }

    #[test]
    fn test_config_is_embedded_as_json() {
        let html = render(&prepared()).unwrap();
        assert!(html.contains("var respecConfig = {"));
        assert!(html.contains(r#""name": "Git Hub Jr""#));
        assert!(html.contains(r#""note": "ends with <\/script>""#));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_body_is_embedded_verbatim() {
        let html = render(&prepared()).unwrap();
        assert!(html.contains("<!-- start of markdown text -->\n\n## Overview\n\nThis is the overview\n\n<!-- end of markdown text -->"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"A & B <"C">"#), "A &amp; B &lt;&quot;C&quot;&gt;");
    }
}
