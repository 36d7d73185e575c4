//! SHA-2 family digest implementations
//!
//! The four variants only differ in their inner hasher type, so one macro
//! stamps them all out.

use crate::hashing::traits::{DigestAlgorithm, StreamingHasher};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

macro_rules! sha2_algorithm {
    ($algorithm:ident, $hasher:ident, $inner:ty, $id:literal, $display:literal) => {
        pub struct $algorithm;

        struct $hasher {
            hasher: $inner,
        }

        impl StreamingHasher for $hasher {
            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.hasher, data);
            }

            fn finalize(self: Box<Self>) -> String {
                format!("{:x}", Digest::finalize(self.hasher))
            }
        }

        impl DigestAlgorithm for $algorithm {
            fn id(&self) -> &'static str {
                $id
            }

            fn display_name(&self) -> &'static str {
                $display
            }

            fn create_hasher(&self) -> Box<dyn StreamingHasher> {
                Box::new($hasher {
                    hasher: <$inner>::new(),
                })
            }

            fn digest_bytes(&self, data: &[u8]) -> String {
                let mut hasher = self.create_hasher();
                hasher.update(data);
                hasher.finalize()
            }
        }
    };
}

sha2_algorithm!(Sha224Algorithm, Sha224Hasher, Sha224, "sha224", "SHA224");
sha2_algorithm!(Sha256Algorithm, Sha256Hasher, Sha256, "sha256", "SHA256");
sha2_algorithm!(Sha384Algorithm, Sha384Hasher, Sha384, "sha384", "SHA384");
sha2_algorithm!(Sha512Algorithm, Sha512Hasher, Sha512, "sha512", "SHA512");
