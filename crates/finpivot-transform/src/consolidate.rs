//! Merge of the receivables and payables exports.

use finpivot_common::{is_blank, string_values};
use finpivot_model::ConsolidateConfig;
use polars::prelude::{
    BooleanChunked, Column, DataFrame, DataType, NewChunkedArray, PolarsResult,
};
use tracing::{info, info_span};

use crate::error::Result;

/// Tag each export with its source and stack them into one table.
///
/// Blank rows are dropped from both exports first. Columns of `receivables`
/// come first in their original order, followed by columns only present in
/// `payables`; cells missing on one side are null.
pub fn consolidate(
    receivables: &DataFrame,
    payables: &DataFrame,
    config: &ConsolidateConfig,
) -> Result<DataFrame> {
    let span = info_span!(
        "consolidate",
        receivables = receivables.height(),
        payables = payables.height()
    );
    let _guard = span.enter();

    let receivables = tag_source(
        drop_blank_rows(receivables)?,
        &config.type_column,
        &config.receivable_label,
    )?;
    let payables = tag_source(
        drop_blank_rows(payables)?,
        &config.type_column,
        &config.payable_label,
    )?;
    let combined = union_concat(&receivables, &payables)?;
    info!(
        rows = combined.height(),
        columns = combined.width(),
        "consolidated exports"
    );
    Ok(combined)
}

/// Drop rows in which every cell is null or blank.
pub fn drop_blank_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = vec![false; df.height()];
    for column in df.get_columns() {
        for (flag, value) in keep.iter_mut().zip(string_values(column)?) {
            if !is_blank(value.as_deref()) {
                *flag = true;
            }
        }
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Set `column` to `label` on every row, replacing an existing column.
pub fn tag_source(mut df: DataFrame, column: &str, label: &str) -> Result<DataFrame> {
    let height = df.height();
    df.with_column(Column::new(column.into(), vec![label; height]))?;
    Ok(df)
}

/// Stack two frames over the union of their columns.
///
/// A column typed differently on each side is stacked as strings.
pub fn union_concat(first: &DataFrame, second: &DataFrame) -> Result<DataFrame> {
    let mut order: Vec<String> = first
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for name in second.get_column_names() {
        if !order.iter().any(|existing| existing == name.as_str()) {
            order.push(name.to_string());
        }
    }

    let dtypes: Vec<DataType> = order
        .iter()
        .map(|name| {
            let left = first.column(name).ok().map(|column| column.dtype().clone());
            let right = second.column(name).ok().map(|column| column.dtype().clone());
            match (left, right) {
                (Some(left), Some(right)) if left == right => left,
                (Some(only), None) | (None, Some(only)) => only,
                _ => DataType::String,
            }
        })
        .collect();

    let mut combined = align_columns(first, &order, &dtypes)?;
    combined.vstack_mut(&align_columns(second, &order, &dtypes)?)?;
    Ok(combined)
}

fn align_columns(df: &DataFrame, order: &[String], dtypes: &[DataType]) -> Result<DataFrame> {
    let columns = order
        .iter()
        .zip(dtypes)
        .map(|(name, dtype)| match df.column(name) {
            Ok(column) => column.cast(dtype),
            Err(_) => Ok(Column::full_null(name.as_str().into(), df.height(), dtype)),
        })
        .collect::<PolarsResult<Vec<Column>>>()?;
    Ok(DataFrame::new(columns)?)
}
