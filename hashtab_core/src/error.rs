//! Error types for the hashtab core library
//!
//! Failures are surfaced per algorithm and never abort the surrounding
//! session: a digest computation either produces a value or one of the
//! errors below.

use thiserror::Error;

pub mod algorithm;
pub mod io;

pub use self::algorithm::AlgorithmError;
pub use self::io::{IoError, IoErrorKind};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the hashtab core library
///
/// Two kinds exist:
/// - I/O errors: the byte source could not be read
/// - Algorithm errors: the hash-primitive provider lacks the requested
///   algorithm
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Digest algorithm related errors
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}
