//! Loading the JSON pipeline configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use finpivot_model::PipelineConfig;
use tracing::debug;

/// Load the pipeline configuration, or the defaults when no file is given.
///
/// Keys missing from the file keep their default values.
pub fn load_pipeline_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: PipelineConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), "loaded pipeline config");
    Ok(config)
}
