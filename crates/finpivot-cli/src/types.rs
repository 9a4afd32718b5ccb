use std::path::PathBuf;

use finpivot_model::ColumnGroups;
use finpivot_transform::DatasetSummary;

/// Outcome of a `consolidate` run.
#[derive(Debug)]
pub struct ConsolidationResult {
    pub output_dir: PathBuf,
    /// Written consolidated table; `None` on a dry run.
    pub consolidated: Option<PathBuf>,
    /// Written pivoted table; `None` on a dry run or when nothing was pivoted.
    pub pivoted: Option<PathBuf>,
    pub summary: DatasetSummary,
    pub normalized_date_columns: Vec<String>,
    pub corrected_ratios: usize,
    /// Row count of the pivoted table; `None` when the pivot did not apply.
    pub pivot_rows: Option<usize>,
    pub dry_run: bool,
}

/// Outcome of a `pivot` run.
#[derive(Debug)]
pub struct PivotResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub source_rows: usize,
    pub output_rows: Option<usize>,
    pub groups: ColumnGroups,
}
