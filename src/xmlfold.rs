//! Reversible line folding for XML archive members.
//!
//! Office containers store their XML parts as a single long line, so any
//! edit rewrites the whole blob and delta compression in a version control
//! system gets nothing to work with. [`split`] inserts a line break (plus one
//! space of indentation) at every tag boundary, turning each element onto its
//! own line; [`join`] removes exactly that inserted sequence.
//!
//! Both functions are purely lexical byte substitutions. They never parse the
//! XML, and they round-trip exactly: `join(split(x)) == x` for any input `x`
//! that does not already contain the folded sequence. An XML part that
//! legitimately contained the literal bytes `>\r\n <` before splitting will
//! have them collapsed by `join`. Document generators do not emit that
//! sequence in practice, and the established filter tools for these formats
//! accept the same ambiguity.

use memchr::memmem;

/// The two-byte tag boundary as written by document applications.
const JOINED: &[u8] = b"><";

/// The five-byte folded boundary: `>` CR LF SPACE `<`.
const FOLDED: &[u8] = b">\r\n <";

/// Replace every non-overlapping occurrence of `needle` with `replacement`,
/// scanning left to right.
fn replace(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut tail = 0;
    for pos in memmem::find_iter(haystack, needle) {
        out.extend_from_slice(&haystack[tail..pos]);
        out.extend_from_slice(replacement);
        tail = pos + needle.len();
    }
    out.extend_from_slice(&haystack[tail..]);
    out
}

/// Fold an XML buffer for storage: every `><` becomes `>\r\n <`.
pub fn split(xml: &[u8]) -> Vec<u8> {
    replace(xml, JOINED, FOLDED)
}

/// Unfold a stored XML buffer: every `>\r\n <` becomes `><`.
pub fn join(xml: &[u8]) -> Vec<u8> {
    replace(xml, FOLDED, JOINED)
}

/// Whether an archive member name refers to an XML part.
///
/// Case-insensitive suffix match on `.xml`; office containers are not
/// consistent about casing (`[Content_Types].xml` vs `word/document.xml`).
#[inline]
pub fn is_xml_member(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".xml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_tag_boundaries() {
        assert_eq!(split(b"<a><b/></a>"), b"<a>\r\n <b/>\r\n </a>".to_vec());
    }

    #[test]
    fn joins_tag_boundaries() {
        assert_eq!(join(b"<a>\r\n <b/>\r\n </a>"), b"<a><b/></a>".to_vec());
    }

    #[test]
    fn empty_input() {
        assert!(split(b"").is_empty());
        assert!(join(b"").is_empty());
    }

    #[test]
    fn input_without_boundaries_is_unchanged() {
        let text = b"<root attr=\"a > b\">text</root>";
        assert_eq!(split(text), text.to_vec());
    }

    #[test]
    fn adjacent_boundaries() {
        assert_eq!(split(b"<a><b><c/></b></a>").as_slice(), b"<a>\r\n <b>\r\n <c/>\r\n </b>\r\n </a>");
    }

    #[test]
    fn boundary_at_buffer_edges() {
        // The needle straddling the very start and end of the buffer.
        assert_eq!(split(b"><"), b">\r\n <".to_vec());
        assert_eq!(join(b">\r\n <"), b"><".to_vec());
    }

    #[test]
    fn xml_member_detection() {
        assert!(is_xml_member("word/document.xml"));
        assert!(is_xml_member("[Content_Types].xml"));
        assert!(is_xml_member("META-INF/manifest.XML"));
        assert!(!is_xml_member("docProps/thumbnail.jpeg"));
        assert!(!is_xml_member("printersettings.bin"));
        assert!(!is_xml_member("xml"));
        assert!(!is_xml_member(""));
    }

    proptest! {
        #[test]
        fn join_inverts_split(input in proptest::collection::vec(any::<u8>(), 0..2048)) {
            prop_assume!(memmem::find(&input, FOLDED).is_none());
            prop_assert_eq!(join(&split(&input)), input);
        }

        #[test]
        fn split_output_has_no_bare_boundary(input in proptest::collection::vec(any::<u8>(), 0..2048)) {
            prop_assert!(memmem::find(&split(&input), JOINED).is_none());
        }
    }
}
