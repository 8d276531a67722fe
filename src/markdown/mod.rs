//! Markdown section extraction.
//!
//! This module turns a Markdown document into an ordered list of
//! [`Section`](crate::Section) values. The design separates the pure
//! line-level tests from the extraction loop:
//!
//! - [`heading`]: heading-line and fence-line recognition
//! - [`extract`]: the scan that groups lines into sections
//!
//! ## Design Notes
//!
//! Only two pieces of Markdown syntax are interpreted:
//!
//! - **ATX headings**: 1-4 `#` characters followed by exactly one space and
//!   non-empty text. Deeper headings and `#runs` without a space are content.
//! - **Code fences**: a line starting with ` ``` ` or `~~~` toggles an
//!   "inside code block" flag, unconditionally. Heading-looking lines inside
//!   a fence are content, never section boundaries. An unterminated fence
//!   therefore suppresses heading detection through end of input; that is
//!   deliberate, since intent for such documents is unspecified.
//!
//! Everything else (lists, tables, inline formatting) passes through verbatim
//! as section content.

mod extract;
mod heading;

pub use extract::extract_sections;
pub use heading::{is_fence_line, parse_heading_line};
