//! Core traits for the digest algorithm system

/// Core trait that all digest algorithms must implement
pub trait DigestAlgorithm: Send + Sync {
    /// Lowercase provider name, e.g. "sha256"
    fn id(&self) -> &'static str;

    /// Identifier shown to users, e.g. "SHA256"
    fn display_name(&self) -> &'static str;

    /// Create a new streaming hasher instance
    fn create_hasher(&self) -> Box<dyn StreamingHasher>;

    /// Calculate the digest of in-memory data in one pass
    fn digest_bytes(&self, data: &[u8]) -> String;
}

/// Trait for streaming digest calculation
pub trait StreamingHasher: Send {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the calculation and return the lowercase hex digest
    fn finalize(self: Box<Self>) -> String;
}
