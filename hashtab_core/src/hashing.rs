//! Digest calculation for the hashtab core library
//!
//! This module contains the algorithm trait system and the streaming
//! engine that feeds byte sources through it.

use crate::EngineConfig;
use crate::error::{AlgorithmError, Error, IoError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

mod algorithms;
mod registry;
mod traits;

// Re-export public types from the trait system
pub use registry::{AlgorithmDescriptor, AlgorithmRegistry};
pub use traits::{DigestAlgorithm, StreamingHasher};

/// Result of a file digest computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDigest {
    pub algorithm: String,
    pub hex: String,
    pub file_size: u64,
    pub duration: Duration,
}

/// Streaming digest engine
///
/// Reads sources in fixed-size chunks and feeds them into a stateful
/// hasher, so memory usage stays proportional to the chunk size no matter
/// how large the input is.
#[derive(Debug, Clone)]
pub struct DigestEngine {
    chunk_size: usize,
}

impl DigestEngine {
    /// Create an engine from a configuration
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
        }
    }

    /// Chunk size used for streaming reads
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Digest an already-open byte source to exhaustion
    ///
    /// The algorithm is resolved from the registry at call time; an
    /// unregistered name fails with [`AlgorithmError::Unsupported`] before
    /// any read happens. Read errors propagate to the caller.
    pub fn digest_reader<R: Read>(&self, internal_name: &str, mut source: R) -> Result<String> {
        let algorithm = AlgorithmRegistry::global()
            .get(internal_name)
            .ok_or_else(|| AlgorithmError::unsupported(internal_name))?;

        let mut hasher = algorithm.create_hasher();
        let mut buffer = vec![0u8; self.chunk_size];
        loop {
            let n = source.read(&mut buffer)?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }
        Ok(hasher.finalize())
    }

    /// Digest an in-memory buffer in one pass
    pub fn digest_bytes(&self, internal_name: &str, data: &[u8]) -> Result<String> {
        let algorithm = AlgorithmRegistry::global()
            .get(internal_name)
            .ok_or_else(|| AlgorithmError::unsupported(internal_name))?;
        Ok(algorithm.digest_bytes(data))
    }

    /// Digest the file at `path`
    ///
    /// The handle is opened here and dropped on every exit path, including
    /// read errors partway through.
    pub fn digest_file(&self, internal_name: &str, path: &Path) -> Result<FileDigest> {
        let start = Instant::now();

        let file =
            File::open(path).map_err(|e| Error::Io(IoError::from_std(e).with_path(path)))?;
        let file_size = file
            .metadata()
            .map_err(|e| Error::Io(IoError::from_std(e).with_path(path)))?
            .len();

        let hex = match self.digest_reader(internal_name, &file) {
            Ok(hex) => hex,
            Err(Error::Io(err)) if err.path.is_none() => {
                warn!("{internal_name} read failed for {}", path.display());
                return Err(Error::Io(err.with_path(path)));
            }
            Err(err) => {
                warn!("{internal_name} failed for {}: {err}", path.display());
                return Err(err);
            }
        };

        let duration = start.elapsed();
        debug!(
            "{internal_name} digest of {} ({file_size} bytes) took {duration:?}",
            path.display()
        );

        Ok(FileDigest {
            algorithm: internal_name.to_string(),
            hex,
            file_size,
            duration,
        })
    }
}
