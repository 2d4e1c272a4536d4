//! SENSA Expansion Engine
//!
//! Expands a single nested configuration document into a set of concrete
//! configuration variants for One-at-a-Time (OAT) sensitivity analysis:
//! one baseline, plus one variant per alternate value of every parameter
//! flagged with a `"sensitivity"` marker.
//!
//! # Core Operations
//!
//! - **Locate**: walk the tree and collect every sensitivity marker with
//!   its candidate values ([`find_sensitivity_paths`])
//! - **Mutate**: assign a value at a parameter path, in place
//!   ([`set_value_at_path`])
//! - **Generate**: build the baseline and its One-at-a-Time variants
//!   ([`generate_sets`])
//!
//! # Architecture
//!
//! ```text
//! Configuration Tree → Locator → [(path, candidates)] → Generator
//!                                        ↓ per candidate
//!                            deep copy + Mutator → ParameterSet
//! ```
//!
//! # Example
//!
//! ```rust
//! use sensa_engine::generate_sets;
//!
//! let config: serde_yaml::Value = serde_yaml::from_str(
//!     "growth: {sensitivity: [0.1, 0.2, 0.3]}",
//! )?;
//!
//! let sets = generate_sets(&config)?;
//! assert_eq!(sets.len(), 3);
//! assert!(sets[0].is_baseline);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod generator;
pub mod locator;
pub mod mutator;

// Re-exports for convenience
pub use error::{ExpandError, ExpandResult, InvalidPathError};
pub use generator::{generate_sets, ParameterSet, BASELINE_LABEL};
pub use locator::{find_sensitivity_paths, SensitivityTarget, SENSITIVITY_KEY};
pub use mutator::set_value_at_path;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the expansion engine
    pub use crate::error::{ExpandError, ExpandResult, InvalidPathError};
    pub use crate::generator::{generate_sets, ParameterSet, BASELINE_LABEL};
    pub use crate::locator::{find_sensitivity_paths, SensitivityTarget, SENSITIVITY_KEY};
    pub use crate::mutator::set_value_at_path;
    pub use sensa_path::ParamPath;
}
