//! Path Locator: discovery of sensitivity markers in a configuration tree
//!
//! A marker is a mapping node whose `"sensitivity"` key holds a non-empty
//! sequence of candidate values. Marker nodes are traversal leaves: once the
//! marker is recognized the locator does not descend into sibling keys.

use sensa_path::ParamPath;
use serde_yaml::{Mapping, Value};

/// Reserved mapping key flagging a node for sensitivity variation
pub const SENSITIVITY_KEY: &str = "sensitivity";

/// One discovered sensitivity marker
///
/// `candidates` is the marker's ordered candidate sequence; the first
/// element is the baseline value for this parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityTarget {
    /// Location of the marker node from the tree root
    pub path: ParamPath,
    /// Candidate values, baseline first; never empty
    pub candidates: Vec<Value>,
}

/// Walk `node` and return every sensitivity marker reachable from it
///
/// `current` is the path accumulated from the root (pass
/// [`ParamPath::root`] at the top call). Sequence elements extend the path
/// with their 0-based index in decimal form. Discovery order across
/// independent markers follows container iteration order and is not part of
/// the contract; only set membership is.
///
/// A `"sensitivity"` key holding an empty sequence or a non-sequence value
/// is not a marker: the mapping is traversed like any other, including the
/// degenerate value itself.
#[must_use]
pub fn find_sensitivity_paths(node: &Value, current: &ParamPath) -> Vec<SensitivityTarget> {
    match node {
        Value::Mapping(map) => {
            if let Some(candidates) = marker_candidates(map) {
                return vec![SensitivityTarget {
                    path: current.clone(),
                    candidates: candidates.to_vec(),
                }];
            }

            let mut found = Vec::new();
            for (key, child) in map {
                let child_path = current.child(key_string(key));
                found.extend(find_sensitivity_paths(child, &child_path));
            }
            found
        }
        Value::Sequence(elements) => {
            let mut found = Vec::new();
            for (index, element) in elements.iter().enumerate() {
                let child_path = current.child_index(index);
                found.extend(find_sensitivity_paths(element, &child_path));
            }
            found
        }
        // Scalars and tagged values carry no markers
        _ => Vec::new(),
    }
}

/// Candidate sequence of a marker node, if `map` is one
fn marker_candidates(map: &Mapping) -> Option<&[Value]> {
    match map.get(SENSITIVITY_KEY) {
        Some(Value::Sequence(candidates)) if !candidates.is_empty() => Some(candidates),
        _ => None,
    }
}

/// String form of a mapping key
///
/// Ingress normalizes keys to strings; scalar keys reaching the locator
/// anyway are rendered through their scalar text so paths stay
/// deterministic.
fn key_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}
