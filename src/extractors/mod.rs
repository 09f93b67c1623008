// src/extractors/mod.rs
pub mod section;
pub mod title;

use std::ops::Range;

pub use title::resolve_title;

/// Cuts `span` out of `content` and tidies the edges left behind.
pub(crate) fn remove_span(content: &str, span: Range<usize>) -> String {
    let mut rewritten = String::with_capacity(content.len() - span.len());
    rewritten.push_str(&content[..span.start]);
    rewritten.push_str(&content[span.end..]);
    trim_blank_edges(&rewritten)
}

/// Drops whitespace-only lines at both ends. Lines with any visible text
/// are kept whole, including their own leading or trailing spaces.
pub(crate) fn trim_blank_edges(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let first_visible = text.len() - text.trim_start().len();
    let line_start = text[..first_visible].rfind('\n').map_or(0, |i| i + 1);

    let last_visible = text.trim_end().len();
    let line_end = text[last_visible..]
        .find(|c| c == '\n' || c == '\r')
        .map_or(text.len(), |i| last_visible + i);

    text[line_start..line_end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_blank_edges_keeps_interior_and_indent() {
        assert_eq!(trim_blank_edges("\n\n  code\n\npara\n\n"), "  code\n\npara");
        assert_eq!(trim_blank_edges(" \n\t\n"), "");
        assert_eq!(trim_blank_edges("text"), "text");
        assert_eq!(trim_blank_edges(""), "");
    }

    #[test]
    fn test_trim_blank_edges_keeps_trailing_spaces_of_last_line() {
        assert_eq!(trim_blank_edges("\n# T\n## Abstract \n\n  \n"), "# T\n## Abstract ");
        assert_eq!(trim_blank_edges("body  \r\n\r\n"), "body  ");
    }

    #[test]
    fn test_remove_span() {
        let content = "keep\n## Drop\nbody\n## Next";
        assert_eq!(remove_span(content, 5..18), "keep\n## Next");
        assert_eq!(remove_span(content, 0..5), "## Drop\nbody\n## Next");
    }
}
