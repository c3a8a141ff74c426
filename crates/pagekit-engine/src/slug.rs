use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped by `encodeURIComponent`
///
/// Anchors must match the ids the site generator attaches to the rendered
/// headings, and those are produced with the browser's component encoding.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Derive a URL-fragment-safe anchor from heading text
///
/// Trims, lowercases, collapses every whitespace run into a single `-` and
/// percent-encodes the result. Pure: equal input always yields equal output.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let hyphenated = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    utf8_percent_encode(&hyphenated, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn test_slugify_trims_and_collapses_whitespace() {
        assert_eq!(slugify("  Run   the\tnode  "), "run-the-node");
    }

    #[test]
    fn test_slugify_percent_encodes_reserved_characters() {
        assert_eq!(slugify("What is ETH?"), "what-is-eth%3F");
        assert_eq!(slugify("Q&A / FAQ"), "q%26a-%2F-faq");
        assert_eq!(slugify("{#id}"), "%7B%23id%7D");
    }

    #[test]
    fn test_slugify_keeps_uri_component_marks() {
        assert_eq!(slugify("Proof-of-stake (PoS)!"), "proof-of-stake-(pos)!");
        assert_eq!(slugify("v1.0_final*"), "v1.0_final*");
    }

    #[test]
    fn test_slugify_encodes_non_ascii_as_utf8() {
        assert_eq!(slugify("Über uns"), "%C3%BCber-uns");
    }

    #[test]
    fn test_slugify_is_pure() {
        let title = "Staking: Solo & Pooled";
        assert_eq!(slugify(title), slugify(title));
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify("   "), "");
    }
}
