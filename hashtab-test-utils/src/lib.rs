//! Test utilities for hashtab
//!
//! This crate provides mock byte sources and temp-file builders for
//! exercising the digest engine's streaming and failure paths.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::TestFileBuilder;
pub use mocks::{ChunkedReader, FailingReader};
