//! Transformations for financial exports.
//!
//! The centerpiece is [`pivot_cost_centers`], which turns the flat
//! `Centro de Custo N` / `Valor no Centro de Custo N` column pairs into one
//! row per allocation. The remaining modules prepare the consolidated table
//! the pivot runs on:
//!
//! - [`consolidate`]: tag and stack the receivables and payables exports
//! - [`normalization`]: rewrite date fields to `YYYY-MM-DD`
//! - [`sanitize`]: cap category ratios at the paid amount
//! - [`summary`]: counts reported after a run

pub mod allocations;
pub mod consolidate;
mod error;
pub mod normalization;
pub mod pivot;
pub mod sanitize;
pub mod summary;

pub use allocations::{RecordAllocations, slot_allocations};
pub use consolidate::consolidate;
pub use error::{PivotError, Result};
pub use normalization::normalize_date_columns;
pub use pivot::{PivotOutcome, pivot_cost_centers};
pub use sanitize::cap_ratio_to_paid;
pub use summary::{DatasetSummary, summarize};
