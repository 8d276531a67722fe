//! Core data model for Markdown-to-XML conversion.
//!
//! This module contains the [`Section`] value object: one Markdown heading
//! plus the content that follows it, up to the next heading.

mod section;

pub use section::{MAX_HEADING_LEVEL, Section};
