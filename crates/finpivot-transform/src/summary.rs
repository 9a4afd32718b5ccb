//! Counts reported after a consolidation run.

use std::collections::BTreeSet;

use finpivot_common::{is_blank, string_values};
use finpivot_model::ConsolidateConfig;
use polars::prelude::DataFrame;

use crate::error::Result;

/// Overview of a consolidated table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub total_rows: usize,
    /// Row count per source label, in order of first appearance.
    pub rows_by_type: Vec<(String, usize)>,
    /// Distinct non-blank cost centers, compared verbatim, when the column exists.
    pub distinct_cost_centers: Option<usize>,
}

/// Summarize a consolidated table.
pub fn summarize(df: &DataFrame, config: &ConsolidateConfig) -> Result<DatasetSummary> {
    let mut rows_by_type: Vec<(String, usize)> = Vec::new();
    if let Ok(column) = df.column(&config.type_column) {
        for value in string_values(column)? {
            let label = value.unwrap_or_default();
            match rows_by_type.iter_mut().find(|(existing, _)| *existing == label) {
                Some((_, count)) => *count += 1,
                None => rows_by_type.push((label, 1)),
            }
        }
    }

    let distinct_cost_centers = match df.column(&config.summary_cost_center_column) {
        Ok(column) => {
            let distinct: BTreeSet<String> = string_values(column)?
                .into_iter()
                .flatten()
                .filter(|value| !is_blank(Some(value)))
                .collect();
            Some(distinct.len())
        }
        Err(_) => None,
    };

    Ok(DatasetSummary {
        total_rows: df.height(),
        rows_by_type,
        distinct_cost_centers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    #[test]
    fn test_summary_counts() {
        let df = DataFrame::new(vec![
            Column::new("tipo".into(), vec!["Receita", "Despesa", "Despesa"]),
            Column::new(
                "categoriesRatio.costCentersRatio.0.costCenter".into(),
                vec![Some("Vendas"), Some("Vendas"), None],
            ),
        ])
        .unwrap();

        let summary = summarize(&df, &ConsolidateConfig::default()).unwrap();

        assert_eq!(summary.total_rows, 3);
        assert_eq!(
            summary.rows_by_type,
            vec![("Receita".to_string(), 1), ("Despesa".to_string(), 2)]
        );
        assert_eq!(summary.distinct_cost_centers, Some(1));
    }

    #[test]
    fn test_summary_cost_centers_are_not_trimmed() {
        let df = DataFrame::new(vec![Column::new(
            "categoriesRatio.costCentersRatio.0.costCenter".into(),
            vec![Some("Vendas"), Some(" Vendas "), Some("  "), None],
        )])
        .unwrap();

        let summary = summarize(&df, &ConsolidateConfig::default()).unwrap();

        assert_eq!(summary.distinct_cost_centers, Some(2));
    }

    #[test]
    fn test_summary_without_optional_columns() {
        let df = DataFrame::new(vec![Column::new("id".into(), vec!["1"])]).unwrap();
        let summary = summarize(&df, &ConsolidateConfig::default()).unwrap();
        assert_eq!(summary.total_rows, 1);
        assert!(summary.rows_by_type.is_empty());
        assert_eq!(summary.distinct_cost_centers, None);
    }
}
