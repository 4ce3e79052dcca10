//! Unified error type for zipdoc operations.
//!
//! Only genuinely fatal conditions become errors: I/O failures while reading
//! or writing buffers, and archive features the ZIP library cannot process
//! (encrypted entries, unknown compression methods). A buffer that simply is
//! not a ZIP archive is never an error; `repack` resolves that case as a
//! [`TransformOutcome::PassThrough`](crate::TransformOutcome::PassThrough).
use thiserror::Error;

/// Main error type for zipdoc operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type for zipdoc operations.
pub type Result<T> = std::result::Result<T, Error>;
