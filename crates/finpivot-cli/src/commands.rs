use anyhow::Result;
use finpivot_cli::config::load_pipeline_config;
use finpivot_cli::pipeline::{
    ConsolidateRequest, classify_file, consolidate_exports, default_output_dir,
    default_pivot_output, pivot_file,
};
use finpivot_cli::types::{ConsolidationResult, PivotResult};
use finpivot_model::ColumnGroups;
use tracing::info_span;

use crate::cli::{ColumnsArgs, ConsolidateArgs, PivotArgs};

pub fn run_consolidate(args: &ConsolidateArgs) -> Result<ConsolidationResult> {
    let config = load_pipeline_config(args.config.as_deref())?;
    let request = ConsolidateRequest {
        receivables: args.receivables.clone(),
        payables: args.payables.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.receivables)),
        dry_run: args.dry_run,
    };
    consolidate_exports(&request, &config)
}

pub fn run_pivot(args: &PivotArgs) -> Result<PivotResult> {
    let span = info_span!("pivot_file", input = %args.input.display());
    let _guard = span.enter();

    let mut config = load_pipeline_config(args.config.as_deref())?.pivot;
    if let Some(prefix) = &args.label_prefix {
        config = config.with_label_prefix(prefix.as_str());
    }
    if let Some(prefix) = &args.value_prefix {
        config = config.with_value_prefix(prefix.as_str());
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_pivot_output(&args.input));
    pivot_file(&args.input, &output, &config)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<ColumnGroups> {
    let config = load_pipeline_config(args.config.as_deref())?.pivot;
    classify_file(&args.input, &config)
}
