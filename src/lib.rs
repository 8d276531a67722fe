//! # mdxml
//!
//! A fast, lightweight converter from Markdown documents to sectioned XML.
//!
//! ## Features
//!
//! - Extracts heading-delimited sections (ATX headings, levels 1-4)
//! - Code-fence aware: heading-like lines inside fenced blocks (backticks or
//!   tildes) are content, not section boundaries
//! - Normalizes heading text into valid XML tag names
//! - Escapes content and renders a flat, well-formed XML document
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdxml::{read_markdown, write_xml};
//!
//! // Convert a Markdown file to XML
//! let sections = read_markdown("input.md").unwrap();
//! write_xml(&sections, "output.xml").unwrap();
//! ```
//!
//! ## Working with Sections
//!
//! The [`Section`] struct is the central data type, one per heading:
//!
//! ```
//! use mdxml::{parse_markdown, sections_to_xml};
//!
//! let sections = parse_markdown("# Config\nkey: value\n## Kafka Settings\nbroker: localhost").unwrap();
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[1].heading(), "Kafka Settings");
//!
//! let xml = sections_to_xml(&sections);
//! assert!(xml.contains("<kafka_settings>"));
//! ```

pub mod error;
pub mod markdown;
pub mod model;
pub mod xml;

pub use error::{Error, Result};
pub use markdown::extract_sections;
pub use model::Section;
pub use xml::XmlExporter;

use std::fs;
use std::path::Path;

/// Parse a Markdown document into its sections.
///
/// Pure function over an in-memory string; see
/// [`extract_sections`](markdown::extract_sections).
///
/// # Errors
///
/// Only [`Error::InvalidSection`] on an internal invariant breach; never
/// fails on ordinary input.
pub fn parse_markdown(text: &str) -> Result<Vec<Section>> {
    markdown::extract_sections(text)
}

/// Render sections to an XML string.
///
/// Zero sections yield an empty `<root>`; persisting zero sections via
/// [`write_xml`] is rejected instead.
pub fn sections_to_xml(sections: &[Section]) -> String {
    XmlExporter::new().render(sections)
}

/// Read a Markdown file and parse it into sections.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read (the content must be UTF-8).
pub fn read_markdown(path: impl AsRef<Path>) -> Result<Vec<Section>> {
    let text = fs::read_to_string(path)?;
    parse_markdown(&text)
}

/// Render sections and write the XML document to a file.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// [`Error::EmptySectionSet`] when `sections` is empty, [`Error::Io`] if the
/// file cannot be written.
pub fn write_xml(sections: &[Section], path: impl AsRef<Path>) -> Result<()> {
    // Reject before touching the filesystem
    if sections.is_empty() {
        return Err(Error::EmptySectionSet);
    }

    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    XmlExporter::new().export(sections, &mut file)
}
