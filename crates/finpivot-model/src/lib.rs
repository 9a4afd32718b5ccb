//! Shared model types for the finpivot workspace.
//!
//! - **ids**: `RowId` and `SlotIndex`, the two keys of the positional join
//! - **columns**: slotted column families and the classifier's output
//! - **config**: naming conventions for the pivot and the consolidation step
//! - **error**: schema errors raised while reading slotted column names

pub mod columns;
pub mod config;
pub mod error;
pub mod ids;

pub use columns::{ColumnGroups, CostCenterAllocation, SlotFamily, SlottedColumn};
pub use config::{
    ConsolidateConfig, DEFAULT_LABEL_OUTPUT, DEFAULT_LABEL_PREFIX, DEFAULT_VALUE_OUTPUT,
    DEFAULT_VALUE_PREFIX, PipelineConfig, PivotConfig,
};
pub use error::SchemaError;
pub use ids::{RowId, SlotIndex, parse_slot_index};
