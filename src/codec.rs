//! The two transform directions, composed from [`repack`] and the XML line
//! folding in [`xmlfold`](crate::xmlfold).

use crate::error::Result;
use crate::repack::{CompressionPolicy, TransformOutcome, repack};
use crate::xmlfold;

/// Re-encode a document archive into its storage representation: every
/// member STORE-compressed, XML members folded onto one line per element.
///
/// Used when content moves from a working file into a version control store.
pub fn encode(input: &[u8]) -> Result<TransformOutcome> {
    repack(input, CompressionPolicy::Store, |name, content| {
        if xmlfold::is_xml_member(name) {
            xmlfold::split(&content)
        } else {
            content
        }
    })
}

/// Re-encode a stored archive back into its delivery representation: every
/// member DEFLATE-compressed, XML folding reversed.
///
/// Used when content moves from the version control store back to a live,
/// application-consumable file. The result is often smaller than what the
/// document application originally wrote; compression levels differ, the
/// content does not.
pub fn decode(input: &[u8]) -> Result<TransformOutcome> {
    repack(input, CompressionPolicy::Deflate, |name, content| {
        if xmlfold::is_xml_member(name) {
            xmlfold::join(&content)
        } else {
            content
        }
    })
}
