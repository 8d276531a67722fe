//! XML content escaping.

use std::borrow::Cow;

use memchr::{memchr2, memchr3};

/// Entity substitutions in application order. Ampersand must come first so
/// the entities produced by later substitutions are not themselves escaped.
const XML_ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
];

/// Escape text for inclusion as XML character content.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms. Text without
/// any of those characters is returned borrowed.
///
/// # Examples
///
/// ```
/// use mdxml::xml::escape_content;
///
/// assert_eq!(escape_content("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(escape_content("plain"), "plain");
/// ```
pub fn escape_content(text: &str) -> Cow<'_, str> {
    if !needs_escaping(text.as_bytes()) {
        return Cow::Borrowed(text);
    }

    let mut result = text.to_string();
    for (c, entity) in XML_ENTITIES {
        result = result.replace(c, entity);
    }
    Cow::Owned(result)
}

fn needs_escaping(bytes: &[u8]) -> bool {
    memchr3(b'&', b'<', b'>', bytes).is_some() || memchr2(b'"', b'\'', bytes).is_some()
}
