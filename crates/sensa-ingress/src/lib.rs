//! SENSA Configuration Ingress
//!
//! The boundary between external configuration files and the expansion
//! engine: format dispatch, parsing, and key normalization. Any input that
//! fails here never reaches the engine.
//!
//! # Core Operations
//!
//! - **Read**: parse YAML or JSON content into a `serde_yaml::Value` tree
//!   ([`readers`])
//! - **Normalize**: stringify mapping keys and strip tags so the engine's
//!   string-key contract holds ([`normalize`])
//! - **Load**: file path → normalized tree in one call ([`load_config`])
//!
//! # Example
//!
//! ```rust,no_run
//! let config = sensa_ingress::load_config("scenario.yaml")?;
//! let sets = sensa_engine::generate_sets(&config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod normalize;
pub mod readers;

// Re-exports for convenience
pub use error::{IngressError, IngressResult};
pub use normalize::normalize;
pub use readers::{default_readers, ConfigReader, JsonReader, ReaderRegistry, YamlReader};

use serde_yaml::Value;
use std::path::Path;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a configuration file into a normalized tree
///
/// Dispatches on the file extension via [`default_readers`], reads the
/// file, parses it, and normalizes mapping keys to strings.
///
/// # Errors
/// [`IngressError::UnsupportedFormat`] when no reader matches the
/// extension, [`IngressError::Io`] on read failure, or the reader's parse
/// errors.
pub fn load_config(path: impl AsRef<Path>) -> IngressResult<Value> {
    let path = path.as_ref();
    let registry = default_readers();

    let reader = registry.find_for_path(path).ok_or_else(|| {
        let shown = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_else(|| path.to_str().unwrap_or("?"));
        IngressError::UnsupportedFormat(shown.to_string())
    })?;

    let content =
        std::fs::read_to_string(path).map_err(|e| IngressError::io_error(path, e))?;
    let value = reader.read(&content)?;

    tracing::debug!("loaded configuration from {}", path.display());
    Ok(normalize(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_config_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "config.yaml", "a: 1\nb:\n  sensitivity: [1, 2]\n");

        let value = load_config(&path).unwrap();
        assert_eq!(value.get("a"), Some(&Value::Number(1.into())));
    }

    #[test]
    fn load_config_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "config.json", r#"{"a": 1}"#);

        let value = load_config(&path).unwrap();
        assert_eq!(value.get("a"), Some(&Value::Number(1.into())));
    }

    #[test]
    fn load_config_normalizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "config.yaml", "1: one\n");

        let value = load_config(&path).unwrap();
        assert_eq!(value.get("1"), Some(&Value::String("one".to_string())));
    }

    #[test]
    fn load_config_unsupported_format() {
        let result = load_config("scenario.toml");
        assert!(matches!(result, Err(IngressError::UnsupportedFormat(ext)) if ext == "toml"));
    }

    #[test]
    fn load_config_missing_file() {
        let result = load_config("does/not/exist.yaml");
        assert!(matches!(result, Err(IngressError::Io { .. })));
    }
}
