//! Nested Mutator: in-place assignment at a parameter path
//!
//! Generalizes dot-notation `set_path` over mappings to mixed
//! mapping/sequence containers: a segment addressing a sequence is
//! re-parsed as a 0-based integer index, a segment addressing a mapping is
//! used as a key. Unresolvable segments are hard errors rather than silent
//! inserts, because every path handed here was produced by the Path Locator
//! against the same tree shape.

use crate::error::InvalidPathError;
use sensa_path::ParamPath;
use serde_yaml::Value;

/// Assign `value` into `root` at `path`, in place
///
/// Walks all but the last segment re-binding a cursor into the tree, then
/// assigns through the final segment, overwriting whatever was there —
/// including replacing structured values with scalars or vice versa. The
/// caller must exclusively own `root` for the duration of the call.
///
/// # Errors
/// [`InvalidPathError`] when `path` is empty or any segment fails to
/// resolve (missing mapping key, non-integer index into a sequence, index
/// out of bounds, or a scalar where a container was expected).
pub fn set_value_at_path(
    root: &mut Value,
    path: &ParamPath,
    value: Value,
) -> Result<(), InvalidPathError> {
    let Some((last, walk)) = path.segments().split_last() else {
        return Err(InvalidPathError::EmptyPath);
    };

    let mut cursor = root;
    for segment in walk {
        cursor = step_into(cursor, segment, path)?;
    }

    match cursor {
        Value::Mapping(map) => {
            map.insert(Value::String(last.clone()), value);
        }
        Value::Sequence(elements) => {
            let index = parse_index(last, path)?;
            let len = elements.len();
            let slot =
                elements
                    .get_mut(index)
                    .ok_or(InvalidPathError::IndexOutOfBounds {
                        path: path.to_string(),
                        index,
                        len,
                    })?;
            *slot = value;
        }
        _ => {
            return Err(InvalidPathError::NotAContainer {
                path: path.to_string(),
                segment: last.clone(),
            });
        }
    }

    Ok(())
}

/// Resolve one intermediate segment to a mutable child reference
fn step_into<'a>(
    container: &'a mut Value,
    segment: &str,
    path: &ParamPath,
) -> Result<&'a mut Value, InvalidPathError> {
    match container {
        Value::Mapping(map) => {
            map.get_mut(segment)
                .ok_or_else(|| InvalidPathError::MissingKey {
                    path: path.to_string(),
                    key: segment.to_string(),
                })
        }
        Value::Sequence(elements) => {
            let index = parse_index(segment, path)?;
            let len = elements.len();
            elements
                .get_mut(index)
                .ok_or(InvalidPathError::IndexOutOfBounds {
                    path: path.to_string(),
                    index,
                    len,
                })
        }
        _ => Err(InvalidPathError::NotAContainer {
            path: path.to_string(),
            segment: segment.to_string(),
        }),
    }
}

fn parse_index(segment: &str, path: &ParamPath) -> Result<usize, InvalidPathError> {
    segment
        .parse::<usize>()
        .map_err(|_| InvalidPathError::BadIndex {
            path: path.to_string(),
            segment: segment.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn tree(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn path(s: &str) -> ParamPath {
        ParamPath::from_str(s).unwrap()
    }

    #[test]
    fn mutator_sets_top_level_key() {
        let mut config = tree("a: 1\nb: 2");

        set_value_at_path(&mut config, &path("a"), Value::Number(99.into())).unwrap();

        assert_eq!(config.get("a"), Some(&Value::Number(99.into())));
        assert_eq!(config.get("b"), Some(&Value::Number(2.into())));
    }

    #[test]
    fn mutator_sets_nested_key() {
        let mut config = tree("solver: {tolerance: 0.1, steps: 100}");

        set_value_at_path(
            &mut config,
            &path("solver.tolerance"),
            Value::String("tight".to_string()),
        )
        .unwrap();

        let solver = config.get("solver").unwrap();
        assert_eq!(
            solver.get("tolerance"),
            Some(&Value::String("tight".to_string()))
        );
        assert_eq!(solver.get("steps"), Some(&Value::Number(100.into())));
    }

    #[test]
    fn mutator_sets_through_sequence() {
        let mut config = tree("processes:\n  - rate: 1\n  - rate: 2");

        set_value_at_path(&mut config, &path("processes.1.rate"), Value::Number(9.into()))
            .unwrap();

        let second = &config.get("processes").unwrap().as_sequence().unwrap()[1];
        assert_eq!(second.get("rate"), Some(&Value::Number(9.into())));
    }

    #[test]
    fn mutator_sets_sequence_element_directly() {
        let mut config = tree("values: [1, 2, 3]");

        set_value_at_path(&mut config, &path("values.0"), Value::Number(7.into())).unwrap();

        let values = config.get("values").unwrap().as_sequence().unwrap();
        assert_eq!(values[0], Value::Number(7.into()));
        assert_eq!(values[2], Value::Number(3.into()));
    }

    #[test]
    fn mutator_replaces_structure_with_scalar() {
        let mut config = tree("block: {x: 1, y: 2}");

        set_value_at_path(&mut config, &path("block"), Value::Bool(false)).unwrap();

        assert_eq!(config.get("block"), Some(&Value::Bool(false)));
    }

    #[test]
    fn mutator_empty_path_fails() {
        let mut config = tree("a: 1");
        let result = set_value_at_path(&mut config, &ParamPath::root(), Value::Null);
        assert!(matches!(result, Err(InvalidPathError::EmptyPath)));
    }

    #[test]
    fn mutator_missing_intermediate_key_fails() {
        let mut config = tree("a: {b: 1}");
        let result = set_value_at_path(&mut config, &path("a.missing.c"), Value::Null);
        assert!(matches!(result, Err(InvalidPathError::MissingKey { .. })));
    }

    #[test]
    fn mutator_non_integer_index_fails() {
        let mut config = tree("list: [1, 2]");
        let result = set_value_at_path(&mut config, &path("list.x"), Value::Null);
        assert!(matches!(result, Err(InvalidPathError::BadIndex { .. })));
    }

    #[test]
    fn mutator_index_out_of_bounds_fails() {
        let mut config = tree("list: [1, 2]");
        let result = set_value_at_path(&mut config, &path("list.5"), Value::Null);
        assert!(matches!(
            result,
            Err(InvalidPathError::IndexOutOfBounds { index: 5, len: 2, .. })
        ));
    }

    #[test]
    fn mutator_scalar_mid_path_fails() {
        let mut config = tree("a: 1");
        let result = set_value_at_path(&mut config, &path("a.b"), Value::Null);
        assert!(matches!(result, Err(InvalidPathError::NotAContainer { .. })));
    }
}
