//! SHA-1 digest implementation

use crate::hashing::traits::{DigestAlgorithm, StreamingHasher};
use sha1::{Digest as Sha1Digest, Sha1};

pub struct Sha1Algorithm;

/// SHA-1 streaming hasher
struct Sha1Hasher {
    hasher: Sha1,
}

impl StreamingHasher for Sha1Hasher {
    fn update(&mut self, data: &[u8]) {
        Sha1Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:x}", Sha1Digest::finalize(self.hasher))
    }
}

impl DigestAlgorithm for Sha1Algorithm {
    fn id(&self) -> &'static str {
        "sha1"
    }

    fn display_name(&self) -> &'static str {
        "SHA1"
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha1Hasher {
            hasher: Sha1::new(),
        })
    }

    fn digest_bytes(&self, data: &[u8]) -> String {
        let mut hasher = self.create_hasher();
        hasher.update(data);
        hasher.finalize()
    }
}
