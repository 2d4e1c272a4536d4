//! Error types for the expansion engine
//!
//! Provides error handling for:
//! - Path resolution (Nested Mutator walking a configuration tree)
//! - Set generation (the top-level expansion entry point)

/// Errors resolving a parameter path against a configuration tree
///
/// Raised by the Nested Mutator when a path segment cannot be resolved
/// against the container it addresses. Locator-produced paths always
/// resolve, so any of these indicates an internal contract violation or a
/// tree mutated between discovery and generation — not a user error.
#[derive(Debug, thiserror::Error)]
pub enum InvalidPathError {
    /// Empty path: there is no segment to assign through
    #[error("empty path: nothing to set")]
    EmptyPath,

    /// Mapping is missing the addressed key
    #[error("missing key '{key}' while resolving '{path}'")]
    MissingKey { path: String, key: String },

    /// Segment addresses into a sequence but is not a non-negative integer
    #[error("segment '{segment}' of '{path}' is not a valid sequence index")]
    BadIndex { path: String, segment: String },

    /// Sequence index past the end of the container
    #[error("index {index} out of bounds (len {len}) while resolving '{path}'")]
    IndexOutOfBounds {
        path: String,
        index: usize,
        len: usize,
    },

    /// Path continues below a scalar value
    #[error("segment '{segment}' of '{path}' addresses into a scalar")]
    NotAContainer { path: String, segment: String },
}

/// Combined expansion engine error
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    /// Path resolution failed during baseline or variant construction
    #[error("invalid path: {0}")]
    InvalidPath(#[from] InvalidPathError),
}

/// Result type alias for expansion operations
pub type ExpandResult<T> = Result<T, ExpandError>;
