//! URI encoding for the two output grammars.
//!
//! XML uses `xs:anyURI`, JSON uses `iri-reference`. Both reject a URL with
//! more than one fragment delimiter.

/// Characters that are escaped before a value is placed in an `xs:anyURI`
const ANY_URI_ESCAPES: &[(char, &str)] = &[
    (' ', "%20"),
    ('"', "%22"),
    ('\'', "%27"),
    ('<', "%3C"),
    ('>', "%3E"),
    ('[', "%5B"),
    (']', "%5D"),
    ('{', "%7B"),
    ('}', "%7D"),
];

fn has_single_fragment(uri: &str) -> bool {
    uri.matches('#').count() <= 1
}

/// Encode a URI for an `xs:anyURI` element or attribute.
///
/// Returns `None` when the value cannot be represented.
///
/// # Examples
///
/// ```
/// use sbom_normalizer::normalize::escape_any_uri;
///
/// assert_eq!(
///     escape_any_uri("https://example.com/a b?q=[1]").as_deref(),
///     Some("https://example.com/a%20b?q=%5B1%5D")
/// );
/// assert_eq!(escape_any_uri("https://example.com/#a#b"), None);
/// ```
#[must_use]
pub fn escape_any_uri(uri: &str) -> Option<String> {
    if uri.is_empty() || !has_single_fragment(uri) {
        return None;
    }
    let mut out = String::with_capacity(uri.len());
    for c in uri.chars() {
        match ANY_URI_ESCAPES.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    Some(out)
}

/// Characters that may not appear unescaped in an `iri-reference`
const IRI_EXCLUDED: &[char] = &['<', '>', '"', '{', '}', '|', '\\', '^', '`'];

/// Whether a URI is acceptable as a JSON `iri-reference`.
///
/// Whitespace, control characters and the delimiters in [`IRI_EXCLUDED`] are
/// rejected rather than encoded.
///
/// # Examples
///
/// ```
/// use sbom_normalizer::normalize::is_iri_reference;
///
/// assert!(is_iri_reference("https://example.com/caf\u{e9}#top"));
/// assert!(!is_iri_reference("https://example.com/a b"));
/// ```
#[must_use]
pub fn is_iri_reference(uri: &str) -> bool {
    !uri.is_empty()
        && has_single_fragment(uri)
        && !uri
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || IRI_EXCLUDED.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_plain_urls_alone() {
        let url = "https://github.com/CycloneDX/cyclonedx-rust#readme";
        assert_eq!(escape_any_uri(url).as_deref(), Some(url));
    }

    #[test]
    fn test_escape_braces_and_quotes() {
        assert_eq!(
            escape_any_uri("http://x/{a}'b'\"c\"<d>").as_deref(),
            Some("http://x/%7Ba%7D%27b%27%22c%22%3Cd%3E")
        );
    }

    #[test]
    fn test_rejects_empty_and_double_fragment() {
        assert_eq!(escape_any_uri(""), None);
        assert_eq!(escape_any_uri("a#b#c"), None);
        assert!(!is_iri_reference(""));
        assert!(!is_iri_reference("a#b#c"));
        assert!(is_iri_reference("a#b"));
        assert!(is_iri_reference("../relative/path"));
    }

    #[test]
    fn test_iri_rejects_excluded_characters() {
        for uri in [
            "https://x/a b",
            "https://x/<script>",
            "https://x/\n",
            "http://x/\"q\"",
            "https://x/{a}",
            "https://x/a|b",
            "https://x/a\\b",
            "https://x/a^b",
            "https://x/`a`",
            "https://x/\u{7f}",
        ] {
            assert!(!is_iri_reference(uri), "{uri:?} should be rejected");
        }
        assert!(is_iri_reference("https://x/%20encoded?q=1&r=[2]"));
        assert!(is_iri_reference("https://example.com/\u{00fc}ber"));
    }
}
