//! Line-level recognition of headings and code fences.

use crate::model::MAX_HEADING_LEVEL;

/// Parse a line as an ATX heading.
///
/// Leading whitespace is ignored (indented headings count). A heading is
/// 1-4 `#` characters followed by exactly one space and non-empty text;
/// the returned text has surrounding whitespace trimmed.
///
/// # Examples
///
/// ```
/// use mdxml::markdown::parse_heading_line;
///
/// assert_eq!(parse_heading_line("## Section One"), Some((2, "Section One")));
/// assert_eq!(parse_heading_line("  ## Indented"), Some((2, "Indented")));
/// assert_eq!(parse_heading_line("##NoSpace"), None);
/// assert_eq!(parse_heading_line("#"), None);
/// assert_eq!(parse_heading_line("##### Too deep"), None);
/// ```
pub fn parse_heading_line(line: &str) -> Option<(u8, &str)> {
    let stripped = line.trim_start();

    let hashes = stripped.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL as usize {
        return None;
    }

    // The `#` run must be followed by a single space, then the heading text.
    let rest = stripped[hashes..].strip_prefix(' ')?;
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    Some((hashes as u8, text))
}

/// Check whether a line is a code fence marker.
///
/// A fence is a trimmed line starting with ` ``` ` or `~~~`. Fence lines
/// toggle code-block state unconditionally; opening and closing markers are
/// not matched against each other.
pub fn is_fence_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}
