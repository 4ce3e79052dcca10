//! Filter-style entry points for version control hooks.
//!
//! A VCS filter hands us a file's bytes and its name, and wants bytes back in
//! every case; the name is only used in diagnostics, never for logic. These
//! wrappers run [`codec::encode`](crate::codec::encode) /
//! [`codec::decode`](crate::codec::decode) and translate the outcome into
//! that contract: transformed bytes with a `debug` diagnostic on success, the
//! original bytes with a `note` diagnostic when the file turned out not to be
//! a ZIP archive (a link, or a stray file sharing the extension).

use crate::codec;
use crate::diag::DiagnosticSink;
use crate::error::Result;
use crate::repack::TransformOutcome;
use std::path::Path;

/// Encode filter: re-pack into the storage representation when writing to
/// the repository.
pub fn encode(data: &[u8], filename: &str, sink: &dyn DiagnosticSink) -> Result<Vec<u8>> {
    report(codec::encode(data)?, filename, "Encoded", "encoding", sink)
}

/// Decode filter: re-pack into the delivery representation when reading from
/// the repository.
pub fn decode(data: &[u8], filename: &str, sink: &dyn DiagnosticSink) -> Result<Vec<u8>> {
    report(codec::decode(data)?, filename, "Decoded", "decoding", sink)
}

fn report(
    outcome: TransformOutcome,
    filename: &str,
    done: &str,
    direction: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<u8>> {
    match outcome {
        TransformOutcome::Transformed(bytes) => {
            sink.debug(&format!("{done} {filename}"));
            Ok(bytes)
        },
        TransformOutcome::PassThrough { original, .. } => {
            sink.note(&format!(
                "Skipped {direction} '{filename}' due to bad ZIP archive. \
                 The file is not a ZIP (might be a link) or the archive is broken."
            ));
            Ok(original)
        },
    }
}

/// File extensions of the common ZIP-based document containers.
///
/// Advisory list for hook adapters that want a default extension mapping;
/// the codec itself never consults it — any valid ZIP archive can be
/// filtered regardless of its name.
pub const ZIP_DOCUMENT_EXTENSIONS: &[&str] = &[
    // OOXML
    "docx", "docm", "dotx", "dotm", "xlsx", "xlsm", "pptx", "ppsx",
    // OpenDocument
    "odt", "ods", "odp", "odg",
];

/// Whether a path carries one of the known zipped-document extensions.
pub fn is_zip_document<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ZIP_DOCUMENT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
