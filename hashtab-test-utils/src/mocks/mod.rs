//! Mock byte sources for testing

mod reader;

pub use reader::{ChunkedReader, FailingReader};
