//! Value normalization applied to consolidated exports.

pub mod date;

pub use date::{normalize_date_columns, normalize_date_value, parse_export_date};
