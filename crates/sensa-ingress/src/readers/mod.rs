//! Configuration readers for supported file formats
//!
//! Provides parsing from external formats into a raw `serde_yaml::Value`
//! tree. Readers return the tree as parsed; key normalization is applied
//! once, after reading, by [`crate::normalize`].

use crate::error::IngressError;
use serde_yaml::Value;
use std::path::Path;

mod json;
mod yaml;

pub use json::JsonReader;
pub use yaml::YamlReader;

/// Reader trait for converting file content into a configuration tree
///
/// Implement this trait to add support for new configuration formats.
pub trait ConfigReader: Send + Sync {
    /// Parse content string into a configuration tree
    fn read(&self, content: &str) -> Result<Value, IngressError>;

    /// Supported file extensions (without dot)
    fn extensions(&self) -> &[&str];

    /// Check if this reader can handle the given path
    fn can_read(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions().contains(&ext))
            .unwrap_or(false)
    }
}

/// Reader registration for dynamic format management
pub struct ReaderRegistry {
    readers: Vec<Box<dyn ConfigReader>>,
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReaderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderRegistry")
            .field("reader_count", &self.readers.len())
            .field("extensions", &self.all_extensions())
            .finish()
    }
}

impl ReaderRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
        }
    }

    /// Register a reader
    pub fn register<R: ConfigReader + 'static>(&mut self, reader: R) {
        self.readers.push(Box::new(reader));
    }

    /// Find reader for path
    #[must_use]
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn ConfigReader> {
        self.readers.iter().find(|r| r.can_read(path)).map(|r| &**r)
    }

    /// Get all registered extensions
    #[must_use]
    pub fn all_extensions(&self) -> Vec<&str> {
        self.readers
            .iter()
            .flat_map(|r| r.extensions())
            .copied()
            .collect()
    }
}

/// Create default reader registry with built-in readers
#[inline]
#[must_use]
pub fn default_readers() -> ReaderRegistry {
    let mut registry = ReaderRegistry::new();

    registry.register(YamlReader);
    registry.register(JsonReader);

    registry
}
