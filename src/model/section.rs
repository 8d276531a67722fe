//! Section value object.

use crate::error::{Error, Result};

/// Heading levels deeper than this are passed through as plain text.
pub const MAX_HEADING_LEVEL: u8 = 4;

/// One Markdown section: a heading and the content that follows it.
///
/// Sections are immutable once constructed and keep the order in which their
/// headings appear in the source document. They are created by
/// [`extract_sections`](crate::markdown::extract_sections) and consumed by
/// [`XmlExporter`](crate::xml::XmlExporter).
///
/// # Examples
///
/// ```
/// use mdxml::Section;
///
/// let section = Section::new(2, "Kafka Settings", "broker: localhost").unwrap();
/// assert_eq!(section.level(), 2);
/// assert_eq!(section.heading(), "Kafka Settings");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Section {
    level: u8,
    heading: String,
    content: String,
}

impl Section {
    /// Create a section, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSection`] if `heading` is empty after trimming
    /// or `level` is outside `1..=4`. The extractor filters both cases before
    /// construction, so hitting this from a parse indicates a logic defect.
    pub fn new(
        level: u8,
        heading: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self> {
        let heading = heading.into();
        if heading.trim().is_empty() {
            return Err(Error::InvalidSection(
                "heading text cannot be empty".to_string(),
            ));
        }
        if !(1..=MAX_HEADING_LEVEL).contains(&level) {
            return Err(Error::InvalidSection(format!(
                "heading level must be 1-{MAX_HEADING_LEVEL}, got {level}"
            )));
        }
        Ok(Self {
            level,
            heading,
            content: content.into(),
        })
    }

    /// Heading depth, `1..=4`.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Heading text with surrounding whitespace trimmed. Never empty.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Raw content lines up to the next heading, joined with newlines and
    /// stripped of leading/trailing blank lines. May be empty.
    pub fn content(&self) -> &str {
        &self.content
    }
}
