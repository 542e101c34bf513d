//! Structured documentation comments attached to members.
//!
//! The comment text is kept line by line so it can be copied onto a generated
//! member verbatim. Only well-formed XML is accepted; anything else is treated
//! as "no documentation".

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Comment lines without the leading `///` marker.
    pub lines: Vec<String>,
}

impl Documentation {
    /// Parse a raw documentation comment. Returns `None` for empty or malformed XML.
    pub fn parse(raw: &str) -> Option<Self> {
        let lines: Vec<String> = raw
            .lines()
            .map(|line| {
                let trimmed = line.trim();
                trimmed
                    .strip_prefix("///")
                    .map(|rest| rest.strip_prefix(' ').unwrap_or(rest))
                    .unwrap_or(trimmed)
                    .to_string()
            })
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return None;
        }

        let documentation = Self { lines };
        if let Err(err) = roxmltree::Document::parse(&documentation.wrapped()) {
            debug!(error = %err, "Documentation comment is not well-formed");
            return None;
        }

        Some(documentation)
    }

    /// Text inside the `<summary>` element, whitespace-normalized.
    pub fn summary(&self) -> Option<String> {
        let wrapped = self.wrapped();
        let document = roxmltree::Document::parse(&wrapped).ok()?;
        let summary = document
            .root_element()
            .children()
            .find(|node| node.has_tag_name("summary"))?;

        let text: Vec<&str> = summary
            .descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .flat_map(str::split_whitespace)
            .collect();
        Some(text.join(" "))
    }

    /// The comment as a single XML document with one root element.
    fn wrapped(&self) -> String {
        format!("<doc>{}</doc>", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary() {
        let doc = Documentation::parse(
            "/// <summary>\n/// The first name\n/// </summary>",
        )
        .unwrap();

        assert_eq!(doc.lines.len(), 3);
        assert_eq!(doc.summary(), Some("The first name".to_string()));
    }

    #[test]
    fn test_summary_includes_nested_text() {
        let doc =
            Documentation::parse("<summary>Uses <see cref=\"Other\"/> and <c>code</c></summary>")
                .unwrap();

        assert_eq!(doc.summary(), Some("Uses and code".to_string()));
    }

    #[test]
    fn test_missing_summary() {
        let doc = Documentation::parse("<remarks>Only remarks</remarks>").unwrap();
        assert_eq!(doc.summary(), None);
    }

    #[test]
    fn test_param_with_attributes() {
        let doc = Documentation::parse(
            "<summary>Adds</summary>\n<param name=\"value\">the value</param>\n<see cref=\"Other\"/>",
        );
        assert!(doc.is_some());
    }

    #[test]
    fn test_angle_bracket_inside_attribute_is_valid() {
        let doc = Documentation::parse("<summary>x</summary>\n<see cref=\"a>b\"/>");
        assert!(doc.is_some());
    }

    #[test]
    fn test_unescaped_ampersand_is_malformed() {
        assert_eq!(Documentation::parse("<summary>a & b</summary>"), None);
        assert!(Documentation::parse("<summary>a &amp; b</summary>").is_some());
    }

    #[test]
    fn test_malformed_xml_yields_no_documentation() {
        assert_eq!(Documentation::parse("/// <summary>Unclosed"), None);
        assert_eq!(Documentation::parse("<summary>x</param>"), None);
        assert_eq!(Documentation::parse("<summary"), None);
    }

    #[test]
    fn test_empty_comment_yields_no_documentation() {
        assert_eq!(Documentation::parse("///\n///"), None);
    }
}
