//! Cleanup of the joined long table.

use finpivot_common::is_blank;
use finpivot_model::PivotConfig;
use polars::prelude::{BooleanChunked, Column, DataFrame, NewChunkedArray};

use crate::error::Result;

/// Fold amounts to their magnitude and drop rows without a cost-center label.
pub fn normalize_pivoted(joined: DataFrame, config: &PivotConfig) -> Result<DataFrame> {
    let folded = fold_amount_signs(joined, &config.value_output)?;
    drop_blank_labels(&folded, &config.label_output)
}

/// Replace every amount with its absolute value. Nulls stay null.
pub fn fold_amount_signs(mut df: DataFrame, value_column: &str) -> Result<DataFrame> {
    let folded: Vec<Option<f64>> = df
        .column(value_column)?
        .f64()?
        .into_iter()
        .map(|amount| amount.map(f64::abs))
        .collect();
    df.with_column(Column::new(value_column.into(), folded))?;
    Ok(df)
}

/// Keep only rows whose label is present and not blank.
pub fn drop_blank_labels(df: &DataFrame, label_column: &str) -> Result<DataFrame> {
    let keep: Vec<bool> = df
        .column(label_column)?
        .str()?
        .into_iter()
        .map(|label| !is_blank(label))
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}
