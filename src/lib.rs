//! Zipdoc - re-encode ZIP-based document formats for delta-friendly
//! version control
//!
//! Document formats like docx or odt are ZIP archives containing mostly XML.
//! Version controlling them as-is gives poor delta compression: the archive
//! is compressed, so any edit scrambles most of its bytes. This library
//! converts such documents between two byte-compatible representations:
//!
//! - **storage**: every member stored uncompressed, XML members folded onto
//!   one line per element (`><` becomes `>\r\n <`), so revision deltas track
//!   the actual edit;
//! - **delivery**: every member Deflate-compressed with the folding
//!   reversed, the form a consuming application expects to open.
//!
//! Buffers that are not ZIP archives (links or stray files sharing a
//! document extension) pass through unchanged rather than failing, so the
//! filters can be applied blindly by extension.
//!
//! # Example - outcome-level API
//!
//! ```no_run
//! use zipdoc::TransformOutcome;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let original = std::fs::read("report.docx")?;
//!
//! match zipdoc::encode(&original)? {
//!     TransformOutcome::Transformed(stored) => {
//!         // every member STORE-compressed, XML folded
//!         std::fs::write("report.docx.stored", stored)?;
//!     },
//!     TransformOutcome::PassThrough { original, reason } => {
//!         eprintln!("left alone: {reason}");
//!         std::fs::write("report.docx.stored", original)?;
//!     },
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - filter API for VCS hooks
//!
//! ```no_run
//! use zipdoc::diag::LogSink;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("report.docx")?;
//!
//! // Always yields bytes; non-archives pass through with a note-level
//! // diagnostic instead of an error.
//! let stored = zipdoc::filter::encode(&data, "report.docx", &LogSink)?;
//! let delivered = zipdoc::filter::decode(&stored, "report.docx", &LogSink)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - XML line folding on its own
//!
//! ```
//! use zipdoc::xmlfold;
//!
//! let folded = xmlfold::split(b"<a><b/></a>");
//! assert_eq!(folded, b"<a>\r\n <b/>\r\n </a>");
//! assert_eq!(xmlfold::join(&folded), b"<a><b/></a>");
//! ```

/// Transform compositions: [`encode`](codec::encode) to the storage
/// representation, [`decode`](codec::decode) back to the delivery
/// representation.
pub mod codec;

/// Injectable diagnostic sink used by the filter entry points.
pub mod diag;

/// Crate error and result types.
pub mod error;

/// Filter-style entry points for version control hooks, plus the known
/// zipped-document extension table.
pub mod filter;

/// The archive re-packing primitive shared by both transform directions.
pub mod repack;

/// The reversible lexical line folding applied to XML members.
pub mod xmlfold;

// Re-export commonly used types for convenience
pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use repack::{CompressionPolicy, TransformOutcome, repack};
