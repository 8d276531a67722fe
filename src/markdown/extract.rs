//! Section extraction: grouping lines under their headings.

use crate::error::Result;
use crate::model::Section;

use super::heading::{is_fence_line, parse_heading_line};

/// Extract heading-delimited sections from a Markdown document.
///
/// The document is scanned once, line by line. Outside code fences, each
/// heading starts a section whose content runs until the next heading (again
/// fence-aware) or end of input. Content is joined with newlines and stripped
/// of surrounding blank lines. Text before the first heading is discarded.
///
/// The scan-for-headings loop and the collect-content loop each carry their
/// own code-block flag; the flags are not shared, so a fence opened inside
/// one section's content does not leak into the outer scan state.
///
/// # Examples
///
/// ```
/// use mdxml::markdown::extract_sections;
///
/// let sections = extract_sections("# One\nalpha\n## Two\nbeta").unwrap();
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].heading(), "One");
/// assert_eq!(sections[1].content(), "beta");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidSection`](crate::Error::InvalidSection) only if a
/// section fails its invariant checks, which the heading parser already
/// rules out; an error here indicates a defect, not bad input.
pub fn extract_sections(text: &str) -> Result<Vec<Section>> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut sections = Vec::new();
    let mut in_code_block = false;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        // Toggle before the heading check; a fence line never starts a section.
        if is_fence_line(line) {
            in_code_block = !in_code_block;
        }

        let heading = if in_code_block {
            None
        } else {
            parse_heading_line(line)
        };

        let Some((level, heading_text)) = heading else {
            i += 1;
            continue;
        };

        // Collect content until the next heading outside a code block.
        i += 1;
        let start = i;
        let mut in_content_code_block = false;

        while i < lines.len() {
            let current = lines[i];

            if is_fence_line(current) {
                in_content_code_block = !in_content_code_block;
            }

            if !in_content_code_block && parse_heading_line(current).is_some() {
                // Next heading found; leave it for the outer loop.
                break;
            }

            i += 1;
        }

        let content = lines[start..i].join("\n");
        sections.push(Section::new(level, heading_text, content.trim())?);
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sections() {
        let input = "# Title\n\n## Section One\nContent of section one\n\n## Section Two\nContent of section two";
        let sections = extract_sections(input).unwrap();

        assert_eq!(sections.len(), 3);
        let levels: Vec<u8> = sections.iter().map(|s| s.level()).collect();
        assert_eq!(levels, [1, 2, 2]);
        let headings: Vec<&str> = sections.iter().map(|s| s.heading()).collect();
        assert_eq!(headings, ["Title", "Section One", "Section Two"]);
        assert_eq!(sections[0].content(), "");
        assert_eq!(sections[1].content(), "Content of section one");
        assert_eq!(sections[2].content(), "Content of section two");
    }

    #[test]
    fn test_preamble_discarded() {
        let input = "intro text\nmore intro\n\n# First\nbody";
        let sections = extract_sections(input).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), "First");
        assert_eq!(sections[0].content(), "body");
    }

    #[test]
    fn test_fake_heading_inside_fence() {
        let input = "# Real\nbefore\n```\n## fake\n```\nafter";
        let sections = extract_sections(input).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), "Real");
        assert_eq!(sections[0].content(), "before\n```\n## fake\n```\nafter");
    }

    #[test]
    fn test_fence_before_first_heading() {
        // A fenced block in the preamble must not swallow the first heading.
        let input = "```\n# not a heading\n```\n# Actual\ntext";
        let sections = extract_sections(input).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), "Actual");
    }

    #[test]
    fn test_tilde_fence() {
        let input = "# Top\n~~~\n## hidden\n~~~";
        let sections = extract_sections(input).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content(), "~~~\n## hidden\n~~~");
    }

    #[test]
    fn test_unterminated_fence_suppresses_headings() {
        // Odd number of fence lines: the rest of the document stays "inside"
        // the code block and no further sections are produced.
        let input = "# Only\ntext\n```\n## never seen\nstill code";
        let sections = extract_sections(input).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), "Only");
        assert_eq!(
            sections[0].content(),
            "text\n```\n## never seen\nstill code"
        );
    }

    #[test]
    fn test_content_trimmed_of_blank_lines() {
        let input = "# A\n\n\nline one\nline two\n\n\n# B\nx";
        let sections = extract_sections(input).unwrap();
        assert_eq!(sections[0].content(), "line one\nline two");
    }

    #[test]
    fn test_level_five_is_content() {
        let input = "# Top\n##### deep heading\nrest";
        let sections = extract_sections(input).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content(), "##### deep heading\nrest");
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_sections("").unwrap().is_empty());
        assert!(extract_sections("no headings here").unwrap().is_empty());
    }

    #[test]
    fn test_consecutive_headings() {
        let input = "# A\n# B\n# C";
        let sections = extract_sections(input).unwrap();
        assert_eq!(sections.len(), 3);
        assert!(sections.iter().all(|s| s.content().is_empty()));
    }
}
