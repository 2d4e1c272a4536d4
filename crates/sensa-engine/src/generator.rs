//! Set Generator: baseline plus One-at-a-Time variant construction
//!
//! Orchestrates the Path Locator and Nested Mutator into the engine's
//! entry point: one baseline parameter set holding the first candidate of
//! every discovered marker, then one independent variant per remaining
//! candidate with all other parameters pinned at baseline.

use crate::error::ExpandResult;
use crate::locator::{find_sensitivity_paths, SensitivityTarget};
use crate::mutator::set_value_at_path;
use sensa_path::ParamPath;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Label carried by the baseline parameter set
pub const BASELINE_LABEL: &str = "baseline";

/// One fully resolved configuration variant
///
/// Identities are 1-based and contiguous within one generation run, with
/// the baseline always at id 1. Each set owns its configuration tree
/// outright; no two sets share mutable substructure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Sequential identity (baseline = 1)
    pub id: u32,
    /// Fully resolved configuration tree, exclusively owned
    pub config: Value,
    /// Dot-joined path of the varied parameter, or [`BASELINE_LABEL`]
    pub label: String,
    /// Value assigned to the varied parameter (`Null` for the baseline)
    pub value: Value,
    /// Whether this is the baseline set
    pub is_baseline: bool,
}

/// Expand `config` into the baseline and its One-at-a-Time variants
///
/// Discovered markers are enumerated in lexicographic path order so
/// identity assignment is reproducible regardless of mapping iteration
/// order. The baseline is a deep copy of the input with every marker path
/// set to its first candidate; each variant is a fresh deep copy of the
/// baseline with exactly one marker path set to a later candidate. A tree
/// without markers yields the baseline alone.
///
/// Total output length is `1 + Σ (len(candidates) − 1)` over all markers;
/// variants that happen to produce identical trees are not deduplicated.
///
/// # Errors
/// [`crate::ExpandError`] if a discovered path fails to resolve during
/// mutation, which indicates the tree changed shape between discovery and
/// generation.
pub fn generate_sets(config: &Value) -> ExpandResult<Vec<ParameterSet>> {
    let mut targets = find_sensitivity_paths(config, &ParamPath::root());
    targets.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!("discovered {} sensitivity markers", targets.len());

    let baseline = build_baseline(config, &targets)?;

    let variant_count: usize = targets
        .iter()
        .map(|t| t.candidates.len().saturating_sub(1))
        .sum();
    let mut sets = Vec::with_capacity(1 + variant_count);

    let mut id: u32 = 1;
    let mut variants = Vec::with_capacity(variant_count);
    for target in &targets {
        for candidate in target.candidates.iter().skip(1) {
            let mut tree = baseline.clone();
            set_value_at_path(&mut tree, &target.path, candidate.clone())?;
            id += 1;
            variants.push(ParameterSet {
                id,
                config: tree,
                label: target.path.join("."),
                value: candidate.clone(),
                is_baseline: false,
            });
        }
    }

    sets.push(ParameterSet {
        id: 1,
        config: baseline,
        label: BASELINE_LABEL.to_string(),
        value: Value::Null,
        is_baseline: true,
    });
    sets.extend(variants);

    tracing::debug!("generated {} parameter sets", sets.len());
    Ok(sets)
}

/// Deep copy of `config` with every marker pinned to its first candidate
///
/// The input's in-place value at a marker node is irrelevant; the baseline
/// always reflects `candidates[0]`.
fn build_baseline(config: &Value, targets: &[SensitivityTarget]) -> ExpandResult<Value> {
    let mut baseline = config.clone();
    for target in targets {
        if let Some(first) = target.candidates.first() {
            set_value_at_path(&mut baseline, &target.path, first.clone())?;
        }
    }
    Ok(baseline)
}
