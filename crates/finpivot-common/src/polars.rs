//! Polars column helpers.
//!
//! Exports arrive as string columns; amounts may use either `1234.56` or the
//! pt-BR `1.234,56` notation.

use polars::prelude::{Column, DataType, PolarsResult};

/// True for a missing cell or one holding only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}

/// Parses an amount, accepting `.` or `,` as the decimal separator.
///
/// When both separators appear, the last one is the decimal separator and the
/// other is a thousands separator. A lone comma is a decimal separator.
/// `NaN` is a missing amount.
///
/// # Examples
///
/// ```
/// use finpivot_common::parse_amount;
///
/// assert_eq!(parse_amount("-50"), Some(-50.0));
/// assert_eq!(parse_amount("1.234,56"), Some(1234.56));
/// assert_eq!(parse_amount("1,234.56"), Some(1234.56));
/// assert_eq!(parse_amount("12,5"), Some(12.5));
/// assert_eq!(parse_amount(""), None);
/// ```
pub fn parse_amount(value: &str) -> Option<f64> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '\u{a0}')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(parsed) = cleaned.parse::<f64>() {
        return not_nan(parsed);
    }
    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => cleaned.replace(',', "."),
        _ => return None,
    };
    normalized.parse::<f64>().ok().and_then(not_nan)
}

fn not_nan(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

/// Reads a column as optional strings, casting non-string columns first.
pub fn string_values(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let cast = column.cast(&DataType::String)?;
    Ok(cast
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Reads a column as cost-center labels.
///
/// Same as [`string_values`], except that `NaN` cells of a float column are
/// missing instead of the text `"NaN"`.
pub fn label_values(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let labels = string_values(column)?;
    if !column.dtype().is_float() {
        return Ok(labels);
    }
    let numbers = column.cast(&DataType::Float64)?;
    Ok(labels
        .into_iter()
        .zip(numbers.f64()?)
        .map(|(label, number)| match number {
            Some(number) if number.is_nan() => None,
            _ => label,
        })
        .collect())
}

/// Reads a column as optional amounts.
///
/// String cells go through [`parse_amount`]; numeric columns are cast to
/// `Float64`. Unparseable and `NaN` cells become `None`.
pub fn amount_values(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    if matches!(column.dtype(), DataType::String) {
        return Ok(column
            .str()?
            .into_iter()
            .map(|value| value.and_then(parse_amount))
            .collect());
    }
    let cast = column.cast(&DataType::Float64)?;
    Ok(cast
        .f64()?
        .into_iter()
        .map(|value| value.and_then(not_nan))
        .collect())
}
