//! Command pipelines, independent of argument parsing and printing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use finpivot_ingest::read_csv_table;
use finpivot_model::{ColumnGroups, PipelineConfig, PivotConfig};
use finpivot_output::{CONSOLIDATED_FILE, PIVOTED_FILE, ensure_output_dir, write_csv};
use finpivot_transform::pivot::classify_columns;
use finpivot_transform::{
    PivotOutcome, cap_ratio_to_paid, consolidate, normalize_date_columns, pivot_cost_centers,
    summarize,
};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use crate::types::{ConsolidationResult, PivotResult};

/// Inputs of a `consolidate` run.
#[derive(Debug, Clone)]
pub struct ConsolidateRequest {
    pub receivables: PathBuf,
    pub payables: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

/// Default output directory: `output/` next to the receivables export.
pub fn default_output_dir(receivables: &Path) -> PathBuf {
    receivables
        .parent()
        .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
}

/// Default pivot output: `<stem>_pivoted.csv` next to the input.
pub fn default_pivot_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "table".to_string(), |stem| stem.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_pivoted.csv"))
}

/// Read both exports, merge and clean them, then pivot the result.
pub fn consolidate_exports(
    request: &ConsolidateRequest,
    config: &PipelineConfig,
) -> Result<ConsolidationResult> {
    let span = info_span!("consolidate_exports", dry_run = request.dry_run);
    let _guard = span.enter();

    let receivables = read_csv_table(&request.receivables)
        .with_context(|| format!("read receivables {}", request.receivables.display()))?;
    let payables = read_csv_table(&request.payables)
        .with_context(|| format!("read payables {}", request.payables.display()))?;

    let mut combined =
        consolidate(&receivables, &payables, &config.consolidate).context("consolidate exports")?;
    let normalized_date_columns =
        normalize_date_columns(&mut combined, &config.consolidate.date_columns)
            .context("normalize dates")?;
    let corrected_ratios = cap_ratio_to_paid(
        &mut combined,
        &config.consolidate.ratio_column,
        &config.consolidate.paid_column,
    )
    .context("correct category ratios")?;
    let summary = summarize(&combined, &config.consolidate).context("summarize")?;

    let outcome = pivot_cost_centers(&combined, &config.pivot).context("pivot cost centers")?;
    let mut pivoted = outcome.into_frame();
    let pivot_rows = pivoted.as_ref().map(DataFrame::height);

    let mut consolidated_path = None;
    let mut pivoted_path = None;
    if !request.dry_run {
        let path = ensure_output_dir(&request.output_dir, CONSOLIDATED_FILE)?;
        write_csv(&mut combined, &path)?;
        consolidated_path = Some(path);
        match pivoted.as_mut() {
            Some(frame) => {
                let path = request.output_dir.join(PIVOTED_FILE);
                write_csv(frame, &path)?;
                pivoted_path = Some(path);
            }
            None => warn!("no cost-center columns found, skipped {PIVOTED_FILE}"),
        }
    }
    info!(
        rows = summary.total_rows,
        pivot_rows = pivot_rows.unwrap_or(0),
        corrected_ratios,
        "consolidation finished"
    );

    Ok(ConsolidationResult {
        output_dir: request.output_dir.clone(),
        consolidated: consolidated_path,
        pivoted: pivoted_path,
        summary,
        normalized_date_columns,
        corrected_ratios,
        pivot_rows,
        dry_run: request.dry_run,
    })
}

/// Pivot a single CSV file and write the long table to `output`.
///
/// Nothing is written when the table has no cost-center columns.
pub fn pivot_file(input: &Path, output: &Path, config: &PivotConfig) -> Result<PivotResult> {
    let df = read_csv_table(input).with_context(|| format!("read {}", input.display()))?;
    let groups = classify_frame(&df, config);

    let (written, output_rows) = match pivot_cost_centers(&df, config)
        .with_context(|| format!("pivot {}", input.display()))?
    {
        PivotOutcome::Pivoted(mut frame) => {
            write_csv(&mut frame, output)?;
            (Some(output.to_path_buf()), Some(frame.height()))
        }
        PivotOutcome::NotApplicable { .. } => (None, None),
    };

    Ok(PivotResult {
        input: input.to_path_buf(),
        output: written,
        source_rows: df.height(),
        output_rows,
        groups,
    })
}

/// Classify the columns of a CSV file without pivoting it.
pub fn classify_file(input: &Path, config: &PivotConfig) -> Result<ColumnGroups> {
    let df = read_csv_table(input).with_context(|| format!("read {}", input.display()))?;
    Ok(classify_frame(&df, config))
}

fn classify_frame(df: &DataFrame, config: &PivotConfig) -> ColumnGroups {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    classify_columns(&names, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_dir() {
        assert_eq!(
            default_output_dir(Path::new("data/receber.csv")),
            PathBuf::from("data/output")
        );
    }

    #[test]
    fn test_default_pivot_output() {
        assert_eq!(
            default_pivot_output(Path::new("data/A5_Consolidado.csv")),
            PathBuf::from("data/A5_Consolidado_pivoted.csv")
        );
    }
}
