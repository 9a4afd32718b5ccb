//! Library side of the `finpivot` command-line tool.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
