//! SENSA Sensitivity Reports
//!
//! Downstream consumer of the expansion engine's output: joins the
//! generated parameter sets with a caller-supplied results mapping
//! (variant id → metric name → metric value) and renders one
//! human-readable table per varied-parameter label. The simulation
//! producing the results is somebody else's job; this crate only honors
//! the id/label contract the engine guarantees.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use sensa_engine::ParameterSet;
use serde_yaml::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Metric name → metric value, for one parameter set
pub type MetricValues = BTreeMap<String, f64>;

/// Parameter set id → its metrics
pub type ResultsMap = BTreeMap<u32, MetricValues>;

/// One row of a sensitivity table
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Identity of the parameter set this row describes
    pub set_id: u32,
    /// Whether this row is the baseline
    pub is_baseline: bool,
    /// Rendered value of the varied parameter in this set
    pub varied_value: String,
    /// Metric values aligned with the table's `metric_names`; `None` when
    /// the results mapping has no entry
    pub metrics: Vec<Option<f64>>,
}

/// Sensitivity table for one varied parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    /// Dot-joined path of the varied parameter
    pub label: String,
    /// Sorted union of metric names across this table's rows
    pub metric_names: Vec<String>,
    /// Baseline row first, then the variants in id order
    pub rows: Vec<ReportRow>,
}

/// Build one table per varied-parameter label
///
/// Labels appear in the order their first variant was emitted, which the
/// engine keeps reproducible. Each table starts with the baseline row
/// (showing the parameter's baseline value) followed by that label's
/// variants. Sets or metrics missing from `results` render as gaps, not
/// errors.
#[must_use]
pub fn build_report(sets: &[ParameterSet], results: &ResultsMap) -> Vec<ReportTable> {
    let baseline = sets.iter().find(|s| s.is_baseline);

    let mut labels = Vec::new();
    for set in sets.iter().filter(|s| !s.is_baseline) {
        if !labels.contains(&set.label) {
            labels.push(set.label.clone());
        }
    }
    tracing::debug!("building report for {} varied parameters", labels.len());

    labels
        .into_iter()
        .map(|label| {
            let variants: Vec<&ParameterSet> = sets
                .iter()
                .filter(|s| !s.is_baseline && s.label == label)
                .collect();

            let mut metric_names: BTreeSet<String> = BTreeSet::new();
            for set in baseline.iter().copied().chain(variants.iter().copied()) {
                if let Some(metrics) = results.get(&set.id) {
                    metric_names.extend(metrics.keys().cloned());
                }
            }
            let metric_names: Vec<String> = metric_names.into_iter().collect();

            let mut rows = Vec::with_capacity(variants.len() + 1);
            if let Some(base) = baseline {
                let base_value = value_at(&base.config, &label)
                    .map_or_else(|| "-".to_string(), render_value);
                rows.push(make_row(base, base_value, &metric_names, results));
            }
            for variant in variants {
                let value = render_value(&variant.value);
                rows.push(make_row(variant, value, &metric_names, results));
            }

            ReportTable {
                label,
                metric_names,
                rows,
            }
        })
        .collect()
}

fn make_row(
    set: &ParameterSet,
    varied_value: String,
    metric_names: &[String],
    results: &ResultsMap,
) -> ReportRow {
    let metrics = metric_names
        .iter()
        .map(|name| results.get(&set.id).and_then(|m| m.get(name)).copied())
        .collect();
    ReportRow {
        set_id: set.id,
        is_baseline: set.is_baseline,
        varied_value,
        metrics,
    }
}

/// Render the tables as Markdown, one section per varied parameter
#[must_use]
pub fn render_markdown(tables: &[ReportTable]) -> String {
    let mut out = String::new();
    for table in tables {
        let _ = writeln!(out, "## {}\n", table.label);

        let _ = write!(out, "| set | value |");
        for name in &table.metric_names {
            let _ = write!(out, " {name} |");
        }
        let _ = writeln!(out);

        let _ = write!(out, "| --- | --- |");
        for _ in &table.metric_names {
            let _ = write!(out, " --- |");
        }
        let _ = writeln!(out);

        for row in &table.rows {
            if row.is_baseline {
                let _ = write!(out, "| {} (baseline) | {} |", row.set_id, row.varied_value);
            } else {
                let _ = write!(out, "| {} | {} |", row.set_id, row.varied_value);
            }
            for metric in &row.metrics {
                match metric {
                    Some(v) => {
                        let _ = write!(out, " {v} |");
                    }
                    None => {
                        let _ = write!(out, " - |");
                    }
                }
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out);
    }
    out
}

/// Compact single-line rendering of a configuration value
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| "?".to_string()),
    }
}

/// Read the value at a dot path, indexing sequences by decimal segments
fn value_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Sequence(elements) => elements.get(segment.parse::<usize>().ok()?)?,
            Value::Mapping(_) => current.get(segment)?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sensa_engine::generate_sets;

    fn expanded() -> Vec<ParameterSet> {
        let config: Value = serde_yaml::from_str(
            r#"
b:
  sensitivity: [10, 20, 30]
c:
  deep:
    sensitivity: ["x", "y"]
"#,
        )
        .unwrap();
        generate_sets(&config).unwrap()
    }

    fn results_for(sets: &[ParameterSet]) -> ResultsMap {
        sets.iter()
            .map(|s| {
                let mut metrics = MetricValues::new();
                metrics.insert("yield".to_string(), f64::from(s.id) * 0.5);
                (s.id, metrics)
            })
            .collect()
    }

    #[test]
    fn report_one_table_per_label() {
        let sets = expanded();
        let tables = build_report(&sets, &results_for(&sets));

        let labels: Vec<&str> = tables.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c.deep"]);
    }

    #[test]
    fn report_rows_baseline_first() {
        let sets = expanded();
        let tables = build_report(&sets, &results_for(&sets));

        let b_table = &tables[0];
        assert_eq!(b_table.rows.len(), 3);
        assert!(b_table.rows[0].is_baseline);
        assert_eq!(b_table.rows[0].varied_value, "10");
        assert_eq!(b_table.rows[1].varied_value, "20");
        assert_eq!(b_table.rows[2].varied_value, "30");
    }

    #[test]
    fn report_joins_metrics_by_id() {
        let sets = expanded();
        let tables = build_report(&sets, &results_for(&sets));

        let row = &tables[0].rows[1];
        assert_eq!(tables[0].metric_names, vec!["yield"]);
        assert_eq!(row.metrics, vec![Some(f64::from(row.set_id) * 0.5)]);
    }

    #[test]
    fn report_missing_results_render_as_gaps() {
        let sets = expanded();
        let mut results = results_for(&sets);
        results.remove(&2);

        let tables = build_report(&sets, &results);
        let row = tables[0].rows.iter().find(|r| r.set_id == 2).unwrap();
        assert_eq!(row.metrics, vec![None]);
    }

    #[test]
    fn report_empty_results_still_tabulates() {
        let sets = expanded();
        let tables = build_report(&sets, &ResultsMap::new());

        assert_eq!(tables.len(), 2);
        assert!(tables[0].metric_names.is_empty());
        assert_eq!(tables[0].rows.len(), 3);
    }

    #[test]
    fn report_no_variants_no_tables() {
        let config: Value = serde_yaml::from_str("a: 1").unwrap();
        let sets = generate_sets(&config).unwrap();

        assert!(build_report(&sets, &ResultsMap::new()).is_empty());
    }

    #[test]
    fn markdown_rendering_shape() {
        let sets = expanded();
        let tables = build_report(&sets, &results_for(&sets));
        let markdown = render_markdown(&tables);

        assert!(markdown.contains("## b"));
        assert!(markdown.contains("## c.deep"));
        assert!(markdown.contains("| set | value | yield |"));
        assert!(markdown.contains("| 1 (baseline) | 10 |"));
        assert!(markdown.contains("| 4 | y |"));
    }
}
