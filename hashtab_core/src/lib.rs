//! hashtab core library
//!
//! Library core of a file-manager "hash tab": compute MD5 / SHA-1 /
//! SHA-2-family hex digests of one selected file on demand, and check a
//! user-pasted digest against the values computed so far. Widget trees and
//! host-plugin glue live in the consuming shell, not here.

pub mod compare;
pub mod error;
pub mod hashing;
pub mod session;

// Re-export main types
pub use compare::ComparisonOutcome;
pub use error::{Error, Result};
pub use hashing::{AlgorithmDescriptor, AlgorithmRegistry, DigestEngine, FileDigest};
pub use session::{ComputeOutcome, FileSession, SlotStatus};

/// Default chunk size for streaming file reads, in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Engine configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// Size of each streaming read
    pub chunk_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl EngineConfig {
    /// Create a test configuration
    pub fn test() -> Self {
        Self {
            chunk_size: 64, // small chunks exercise more loop iterations
        }
    }
}
