//! Digest algorithm related error types

use thiserror::Error;

/// Error raised when the hash-primitive provider cannot serve a request
///
/// The registry only hands out names it knows, so this mostly guards the
/// defensive lookup the engine performs at call time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// No implementation is registered under this name
    #[error("unsupported digest algorithm: {name}")]
    Unsupported { name: String },
}

impl AlgorithmError {
    /// Create an unsupported-algorithm error
    pub fn unsupported(name: &str) -> Self {
        Self::Unsupported {
            name: name.to_string(),
        }
    }
}
