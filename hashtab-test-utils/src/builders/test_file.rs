//! Temp-file fixtures for digest tests

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::TempDir;

enum Pattern {
    Zero,
    Byte(u8),
    Cycling,
}

/// Builder for temp files with a known size and byte pattern
pub struct TestFileBuilder {
    name: String,
    size: usize,
    pattern: Pattern,
}

impl TestFileBuilder {
    /// Create a builder for a file named `name`
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            size: 0,
            pattern: Pattern::Zero,
        }
    }

    /// Set the file size in bytes
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Fill with a single repeated byte
    pub fn with_byte(mut self, byte: u8) -> Self {
        self.pattern = Pattern::Byte(byte);
        self
    }

    /// Fill with bytes cycling through 0..=255
    pub fn with_cycling_bytes(mut self) -> Self {
        self.pattern = Pattern::Cycling;
        self
    }

    /// Content this builder would write
    pub fn content(&self) -> Vec<u8> {
        match self.pattern {
            Pattern::Zero => vec![0u8; self.size],
            Pattern::Byte(byte) => vec![byte; self.size],
            Pattern::Cycling => (0..self.size).map(|i| (i % 256) as u8).collect(),
        }
    }

    /// Write the file into `dir` and return its path
    pub fn create_in(self, dir: &TempDir) -> io::Result<PathBuf> {
        let path = dir.path().join(&self.name);
        let mut file = File::create(&path)?;
        file.write_all(&self.content())?;
        file.sync_all()?;
        Ok(path)
    }
}
