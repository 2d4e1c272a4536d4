//! Key normalization for parsed configuration trees
//!
//! The expansion engine's contract is that mapping keys are strings. YAML
//! permits scalar keys of any type, so ingress rewrites every key to its
//! string form and unwraps tagged values before a tree crosses into the
//! engine.

use serde_yaml::{Mapping, Value};

/// Normalize a parsed tree: stringify mapping keys, strip YAML tags
#[must_use]
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut normalized = Mapping::new();
            for (key, child) in map {
                normalized.insert(Value::String(key_string(&key)), normalize(child));
            }
            Value::Mapping(normalized)
        }
        Value::Sequence(elements) => {
            Value::Sequence(elements.into_iter().map(normalize).collect())
        }
        Value::Tagged(tagged) => normalize(tagged.value),
        scalar => scalar,
    }
}

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

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn normalize_leaves_string_keys_alone() {
        let value = tree("a: 1\nb: {c: 2}");
        assert_eq!(normalize(value.clone()), value);
    }

    #[test]
    fn normalize_stringifies_numeric_keys() {
        let value = normalize(tree("1: one\n2: two"));
        assert_eq!(value.get("1"), Some(&Value::String("one".to_string())));
        assert_eq!(value.get("2"), Some(&Value::String("two".to_string())));
    }

    #[test]
    fn normalize_stringifies_bool_keys() {
        let value = normalize(tree("true: yes_branch"));
        assert_eq!(
            value.get("true"),
            Some(&Value::String("yes_branch".to_string()))
        );
    }

    #[test]
    fn normalize_recurses_into_sequences() {
        let value = normalize(tree("list:\n  - 1: nested"));
        let first = &value.get("list").unwrap().as_sequence().unwrap()[0];
        assert_eq!(first.get("1"), Some(&Value::String("nested".to_string())));
    }

    #[test]
    fn normalize_strips_tags() {
        let value = normalize(tree("a: !custom 5"));
        assert_eq!(value.get("a"), Some(&Value::Number(5.into())));
    }
}
