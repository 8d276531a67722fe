//! XML document generation from sections.
//!
//! Pure string transformation plus a thin writer:
//!
//! - [`escape`]: XML entity escaping for character content
//! - [`tag`]: heading text → valid XML tag name
//! - [`writer`]: renders an ordered section list as the output document
//!
//! The output is flat by design: every section becomes a direct child of
//! `<root>` regardless of its heading level, and two headings that normalize
//! to the same tag name produce sibling elements with that shared name
//! (well-formed XML, so it is not deduplicated).

mod escape;
mod tag;
mod writer;

pub use escape::escape_content;
pub use tag::normalize_tag_name;
pub use writer::XmlExporter;
