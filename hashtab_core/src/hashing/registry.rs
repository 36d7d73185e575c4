//! Central registry for digest algorithm implementations

use super::traits::DigestAlgorithm;
use crate::error::{AlgorithmError, Result};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// One presentable registry entry
///
/// Descriptors are what the UI host iterates over: a display id, the name
/// used to request the algorithm from the provider, and the hex length of
/// its output. The length is constant for a given algorithm regardless of
/// input size.
#[derive(Debug, Clone)]
pub struct AlgorithmDescriptor {
    id: String,
    internal_name: String,
    hex_len: OnceCell<usize>,
}

impl AlgorithmDescriptor {
    pub(crate) fn new(id: &str, internal_name: &str) -> Self {
        Self {
            id: id.to_string(),
            internal_name: internal_name.to_string(),
            hex_len: OnceCell::new(),
        }
    }

    pub(crate) fn with_hex_len(id: &str, internal_name: &str, hex_len: usize) -> Self {
        Self {
            id: id.to_string(),
            internal_name: internal_name.to_string(),
            hex_len: OnceCell::with_value(hex_len),
        }
    }

    /// Identifier shown to users, e.g. "SHA256"
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name used to request the algorithm from the provider, e.g. "sha256"
    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    /// Number of hex characters in this algorithm's output
    ///
    /// Known statically for the legacy pair; otherwise measured once by
    /// hashing empty input, then cached for the descriptor's lifetime.
    pub fn digest_hex_length(&self) -> Result<usize> {
        if let Some(hex_len) = self.hex_len.get() {
            return Ok(*hex_len);
        }
        let algorithm = AlgorithmRegistry::global()
            .get(&self.internal_name)
            .ok_or_else(|| AlgorithmError::unsupported(&self.internal_name))?;
        let hex_len = algorithm.digest_bytes(&[]).len();
        Ok(*self.hex_len.get_or_init(|| hex_len))
    }
}

/// Central registry for all digest algorithms
pub struct AlgorithmRegistry {
    algorithms: RwLock<HashMap<String, Arc<dyn DigestAlgorithm>>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    fn new() -> Self {
        Self {
            algorithms: RwLock::new(HashMap::new()),
        }
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(|| {
            let mut registry = Self::new();
            // Register all built-in algorithms
            super::algorithms::register_all(&mut registry);
            registry
        })
    }

    /// Register a new algorithm under its provider name
    pub fn register(&mut self, algorithm: impl DigestAlgorithm + 'static) {
        let mut algorithms = self.algorithms.write().unwrap();
        let id = algorithm.id().to_string();
        algorithms.insert(id, Arc::new(algorithm));
    }

    /// Get an algorithm by provider name
    pub fn get(&self, internal_name: &str) -> Option<Arc<dyn DigestAlgorithm>> {
        let algorithms = self.algorithms.read().unwrap();
        algorithms.get(internal_name).cloned()
    }

    /// List all registered provider names, sorted
    pub fn list(&self) -> Vec<String> {
        let algorithms = self.algorithms.read().unwrap();
        let mut names: Vec<String> = algorithms.keys().cloned().collect();
        names.sort();
        names
    }

    /// Ordered descriptors for presentation
    ///
    /// MD5 and SHA-1 come first, in that fixed order, whether or not the
    /// provider set includes them. Every other registered SHA-family
    /// algorithm follows, deduplicated against the fixed pair and sorted
    /// for a reproducible order (the underlying set is unordered).
    pub fn descriptors(&self) -> Vec<AlgorithmDescriptor> {
        let mut descriptors = vec![
            AlgorithmDescriptor::with_hex_len("MD5", "md5", 32),
            AlgorithmDescriptor::with_hex_len("SHA1", "sha1", 40),
        ];
        for name in self.list() {
            if !is_sha_family(&name) {
                continue;
            }
            if descriptors
                .iter()
                .any(|d| d.id().eq_ignore_ascii_case(&name))
            {
                continue;
            }
            descriptors.push(AlgorithmDescriptor::new(&name.to_ascii_uppercase(), &name));
        }
        descriptors
    }
}

/// "sha" followed by at least one digit, e.g. "sha256" but not "shake128"
fn is_sha_family(name: &str) -> bool {
    name.strip_prefix("sha")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}
