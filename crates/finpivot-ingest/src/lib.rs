//! Financial export ingestion.
//!
//! Reads the receivables and payables CSV exports into Polars DataFrames.
//! Every column is loaded as a string; typing happens downstream where the
//! pivot and the sanitization passes know which columns hold amounts.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use finpivot_ingest::read_csv_table;
//!
//! let receivables = read_csv_table(Path::new("exports/contas_a_receber.csv"))?;
//! println!("{} rows", receivables.height());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{MAX_CSV_FILE_SIZE, read_csv_table, read_csv_table_with_limit, validate_encoding};
