//! Builders for on-disk test fixtures

mod test_file;

pub use test_file::TestFileBuilder;
