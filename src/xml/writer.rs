//! XML document writer.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::Section;

use super::escape::escape_content;
use super::tag::normalize_tag_name;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Renders an ordered list of sections as a flat XML document.
///
/// Every section becomes one child of `<root>`, in input order. Element tags
/// get two-space indentation, content lines four-space; the indentation is
/// cosmetic and carries no meaning for a consuming parser.
#[derive(Debug, Clone, Default)]
pub struct XmlExporter;

impl XmlExporter {
    /// Create a new XmlExporter.
    pub fn new() -> Self {
        Self
    }

    /// Render sections to an in-memory XML string.
    ///
    /// Zero sections are permitted here and yield an empty `<root>` element;
    /// only [`export`](Self::export) treats that as an error.
    pub fn render(&self, sections: &[Section]) -> String {
        let mut parts = Vec::with_capacity(2 + sections.len() * 4);
        parts.push(XML_DECLARATION.to_string());
        parts.push("<root>".to_string());

        for section in sections {
            let tag = normalize_tag_name(section.heading());
            let escaped = escape_content(section.content());

            parts.push(format!("  <{tag}>"));
            if !escaped.is_empty() {
                for line in escaped.split('\n') {
                    parts.push(format!("    {line}"));
                }
            }
            parts.push(format!("  </{tag}>"));
        }

        parts.push("</root>".to_string());
        parts.join("\n")
    }

    /// Render sections and write the document to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySectionSet`] when `sections` is empty, or
    /// [`Error::Io`] if the write fails.
    pub fn export<W: Write>(&self, sections: &[Section], writer: &mut W) -> Result<()> {
        if sections.is_empty() {
            return Err(Error::EmptySectionSet);
        }

        writer.write_all(self.render(sections).as_bytes())?;
        Ok(())
    }
}
