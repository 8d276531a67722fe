//! Tag-name normalization for section headings.

/// Fallback tag used when a heading normalizes to nothing usable.
const FALLBACK_TAG: &str = "section";

/// Generate a valid XML tag name from heading text.
///
/// Lowercases, replaces whitespace and hyphens with underscores, drops
/// everything that is not an ASCII letter, digit, underscore or dot, then
/// cleans up: underscore runs collapse to one, leading/trailing underscores
/// and dots are stripped, a leading digit or the reserved `xml` prefix gets
/// an underscore prepended. Falls back to `"section"` when nothing remains.
///
/// Deterministic but not unique: distinct headings may produce the same tag
/// name, which the writer emits as duplicate sibling elements.
///
/// # Examples
///
/// ```
/// use mdxml::xml::normalize_tag_name;
///
/// assert_eq!(normalize_tag_name("Kafka Settings"), "kafka_settings");
/// assert_eq!(normalize_tag_name("v2.0 - Release Notes!"), "v2.0_release_notes");
/// assert_eq!(normalize_tag_name("42 Answers"), "_42_answers");
/// assert_eq!(normalize_tag_name("XML Config"), "_xml_config");
/// assert_eq!(normalize_tag_name("???"), "section");
/// ```
pub fn normalize_tag_name(text: &str) -> String {
    let mapped: String = text
        .trim()
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() || c == '-' {
                Some('_')
            } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                Some(c.to_ascii_lowercase())
            } else {
                // Punctuation, symbols, non-ASCII: dropped entirely
                None
            }
        })
        .collect();

    // Collapse underscore runs, then strip leading/trailing '_' and '.'.
    let collapsed = mapped
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    let trimmed = collapsed.trim_matches(|c: char| c == '_' || c == '.');

    if trimmed.is_empty() {
        return FALLBACK_TAG.to_string();
    }

    let mut name = trimmed.to_string();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        // XML names cannot start with a digit
        name.insert(0, '_');
    }
    if name.starts_with("xml") {
        // Names beginning with "xml" are reserved
        name.insert(0, '_');
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_words() {
        assert_eq!(normalize_tag_name("kafka connection"), "kafka_connection");
        assert_eq!(normalize_tag_name("Overview"), "overview");
    }

    #[test]
    fn test_whitespace_and_hyphens() {
        assert_eq!(normalize_tag_name("  Multiple   Spaces  "), "multiple_spaces");
        assert_eq!(normalize_tag_name("some-hyphen-name"), "some_hyphen_name");
        assert_eq!(normalize_tag_name("tab\there"), "tab_here");
    }

    #[test]
    fn test_special_characters_dropped() {
        assert_eq!(normalize_tag_name("Hello, World!"), "hello_world");
        assert_eq!(normalize_tag_name("API (v2)"), "api_v2");
        assert_eq!(normalize_tag_name("naïve café"), "nave_caf");
    }

    #[test]
    fn test_dots_kept_interior_stripped_at_edges() {
        assert_eq!(normalize_tag_name("v1.2.3"), "v1.2.3");
        assert_eq!(normalize_tag_name("...dots..."), "dots");
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(normalize_tag_name("42 Answers"), "_42_answers");
        assert_eq!(normalize_tag_name("2024"), "_2024");
    }

    #[test]
    fn test_xml_prefix_reserved() {
        assert_eq!(normalize_tag_name("xml settings"), "_xml_settings");
        assert_eq!(normalize_tag_name("XML Settings"), "_xml_settings");
        assert_eq!(normalize_tag_name("XmlHttpRequest"), "_xmlhttprequest");
        // "xml" not at the start is fine
        assert_eq!(normalize_tag_name("not xml"), "not_xml");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(normalize_tag_name(""), "section");
        assert_eq!(normalize_tag_name("   "), "section");
        assert_eq!(normalize_tag_name("???"), "section");
        assert_eq!(normalize_tag_name("___"), "section");
        assert_eq!(normalize_tag_name("日本語"), "section");
    }

    #[test]
    fn test_underscore_runs_collapse() {
        assert_eq!(normalize_tag_name("a  -  b"), "a_b");
        assert_eq!(normalize_tag_name("a___b"), "a_b");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Kafka Settings", "42 Answers", "XML Config", "v1.2.3", "???"] {
            let once = normalize_tag_name(input);
            assert_eq!(normalize_tag_name(&once), once, "not a fixed point: {input}");
        }
    }
}
