//! MD5 digest implementation
//!
//! Kept for checksum verification against legacy published digests; not a
//! collision-resistant algorithm.

use crate::hashing::traits::{DigestAlgorithm, StreamingHasher};
use md5::{Digest as Md5Digest, Md5};

pub struct Md5Algorithm;

/// MD5 streaming hasher
struct Md5Hasher {
    hasher: Md5,
}

impl StreamingHasher for Md5Hasher {
    fn update(&mut self, data: &[u8]) {
        Md5Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:x}", Md5Digest::finalize(self.hasher))
    }
}

impl DigestAlgorithm for Md5Algorithm {
    fn id(&self) -> &'static str {
        "md5"
    }

    fn display_name(&self) -> &'static str {
        "MD5"
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Md5Hasher { hasher: Md5::new() })
    }

    fn digest_bytes(&self, data: &[u8]) -> String {
        let mut hasher = self.create_hasher();
        hasher.update(data);
        hasher.finalize()
    }
}
