//! CSV writer built on the polars serializer.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use crate::error::{OutputError, Result};

/// File name of the consolidated table inside an output directory.
pub const CONSOLIDATED_FILE: &str = "consolidated.csv";

/// File name of the pivoted table inside an output directory.
pub const PIVOTED_FILE: &str = "pivoted.csv";

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Ensure an output directory exists and return the path of `file_name` in it.
pub fn ensure_output_dir(dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir.join(file_name))
}

/// Write `df` as a comma-separated file with a header row.
///
/// Parent directories are created as needed and an existing file is
/// overwritten.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote CSV"
    );
    Ok(())
}
