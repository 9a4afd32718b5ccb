//! Writing result tables to disk.

mod csv;
mod error;

pub use csv::{CONSOLIDATED_FILE, PIVOTED_FILE, ensure_output_dir, ensure_parent_dir, write_csv};
pub use error::{OutputError, Result};
