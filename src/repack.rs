//! Archive re-packing primitive.
//!
//! [`repack`] reads a ZIP archive from an in-memory buffer and writes every
//! member back out under a caller-chosen compression method, running each
//! member's decompressed bytes through a caller-supplied transform on the
//! way. Member order, names, timestamps and permissions survive the trip;
//! CRCs and sizes are recomputed by the writer.
//!
//! A buffer that is not a ZIP archive at all is an expected input (a symlink
//! or stray file sharing a document extension), so that case is reported as
//! [`TransformOutcome::PassThrough`] instead of an error. Everything else —
//! I/O failures, encrypted entries, unsupported compression methods — is
//! fatal and propagates as [`Error`](crate::Error).

use crate::error::Result;
use std::io::{Cursor, Read, Write};
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Compression method applied uniformly to every member of one output
/// archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionPolicy {
    /// No compression. Keeps XML members byte-addressable for delta
    /// compression in a version control store.
    Store,
    /// Standard Deflate compression, as document applications expect.
    Deflate,
}

impl CompressionPolicy {
    #[inline]
    fn method(self) -> CompressionMethod {
        match self {
            CompressionPolicy::Store => CompressionMethod::Stored,
            CompressionPolicy::Deflate => CompressionMethod::Deflated,
        }
    }
}

/// Result of one re-packing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// The input was a valid archive and was rewritten.
    Transformed(Vec<u8>),
    /// The input was not a valid archive; the original bytes are returned
    /// untouched.
    PassThrough {
        /// The caller's input buffer, unchanged.
        original: Vec<u8>,
        /// Human-readable explanation, suitable for diagnostics.
        reason: String,
    },
}

impl TransformOutcome {
    /// Unwrap into plain bytes, whichever branch was taken.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            TransformOutcome::Transformed(bytes) => bytes,
            TransformOutcome::PassThrough { original, .. } => original,
        }
    }

    /// Whether the archive was actually rewritten.
    #[inline]
    pub fn is_transformed(&self) -> bool {
        matches!(self, TransformOutcome::Transformed(_))
    }
}

/// Entries at or past the ZIP64 size boundary need the extended format.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// Rewrite `input` as a new archive under `policy`, applying
/// `member_transform(name, content)` to each member's decompressed bytes.
///
/// Members are visited in the order the archive stores them, and the output
/// keeps that order exactly; duplicate names are carried over as duplicates.
/// Directory entries are re-emitted as directory entries. A zero-member
/// archive produces a valid empty archive.
pub fn repack<F>(
    input: &[u8],
    policy: CompressionPolicy,
    mut member_transform: F,
) -> Result<TransformOutcome>
where
    F: FnMut(&str, Vec<u8>) -> Vec<u8>,
{
    let mut archive = match ZipArchive::new(Cursor::new(input)) {
        Ok(archive) => archive,
        Err(ZipError::InvalidArchive(_)) => {
            return Ok(TransformOutcome::PassThrough {
                original: input.to_vec(),
                reason: "not a ZIP archive or the archive is corrupt".to_string(),
            });
        },
        Err(err) => return Err(err.into()),
    };

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_owned();

        let mut options = FileOptions::default()
            .compression_method(policy.method())
            .last_modified_time(entry.last_modified());
        if let Some(mode) = entry.unix_mode() {
            options = options.unix_permissions(mode);
        }

        if entry.is_dir() {
            writer.add_directory(name, options)?;
            continue;
        }

        let mut content = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut content)?;
        let content = member_transform(&name, content);

        if content.len() as u64 >= ZIP64_THRESHOLD {
            options = options.large_file(true);
        }
        writer.start_file(name, options)?;
        writer.write_all(&content)?;
    }

    let cursor = writer.finish()?;
    Ok(TransformOutcome::Transformed(cursor.into_inner()))
}
