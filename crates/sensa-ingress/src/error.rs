//! Error types for configuration ingress
//!
//! Everything here is raised before the expansion engine is invoked: an
//! input that fails ingress never reaches the engine.

use std::path::PathBuf;

/// Errors during configuration loading (ingress)
#[derive(Debug, thiserror::Error)]
pub enum IngressError {
    /// No reader registered for the input's format
    #[error("unsupported configuration format: '{0}'")]
    UnsupportedFormat(String),

    /// Syntax error in the source document
    #[error("syntax error: {0}")]
    Syntax(String),

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document parsed to nothing
    #[error("empty configuration document")]
    EmptyDocument,
}

impl IngressError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for ingress operations
pub type IngressResult<T> = Result<T, IngressError>;
