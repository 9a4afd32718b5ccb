//! Date normalization for export date fields.
//!
//! Exports mix ISO timestamps with day-first Brazilian dates. Everything is
//! rewritten to `YYYY-MM-DD`; values that cannot be read become empty.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use finpivot_common::string_values;
use polars::prelude::{Column, DataFrame};
use tracing::{debug, warn};

use crate::error::Result;

const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Parse an export date. Ambiguous slash dates are read day first.
pub fn parse_export_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        })
}

/// Format a value as `YYYY-MM-DD`, or an empty string when unreadable.
///
/// # Examples
///
/// ```
/// use finpivot_transform::normalization::normalize_date_value;
///
/// assert_eq!(normalize_date_value("15/03/2024"), "2024-03-15");
/// assert_eq!(normalize_date_value("2024-03-15T10:30:00"), "2024-03-15");
/// assert_eq!(normalize_date_value("not a date"), "");
/// ```
pub fn normalize_date_value(value: &str) -> String {
    parse_export_date(value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Rewrite the listed date columns in place.
///
/// Columns absent from `df` are skipped. Returns the names of the columns
/// that were rewritten.
pub fn normalize_date_columns(df: &mut DataFrame, columns: &[String]) -> Result<Vec<String>> {
    let mut rewritten = Vec::new();
    for name in columns {
        let Ok(column) = df.column(name) else {
            debug!(column = %name, "date column not present");
            continue;
        };
        let raw = string_values(column)?;
        let mut unreadable = 0usize;
        let normalized: Vec<String> = raw
            .iter()
            .map(|value| {
                let text = value.as_deref().unwrap_or_default();
                let date = normalize_date_value(text);
                if date.is_empty() && !text.trim().is_empty() {
                    unreadable += 1;
                }
                date
            })
            .collect();
        if unreadable > 0 {
            warn!(column = %name, unreadable, "cleared unreadable dates");
        }
        df.with_column(Column::new(name.as_str().into(), normalized))?;
        rewritten.push(name.clone());
    }
    Ok(rewritten)
}
