//! Wide-to-long cost-center pivot.
//!
//! Financial exports carry a variable number of cost-center allocations per
//! record as pairs of flat columns (`Centro de Custo N` holding the name,
//! `Valor no Centro de Custo N` holding the amount). The pivot reshapes them
//! into one row per populated allocation:
//!
//! 1. **classify**: split the columns into label, value and identity groups
//! 2. **tag**: give every source row a `RowId`
//! 3. **melt**: unpivot labels and values separately, keeping the slot index
//! 4. **join**: left-join labels onto values on `(RowId, SlotIndex)`
//! 5. **normalize**: fold amount signs, drop rows without a label
//!
//! Output rows are ordered by label column first, then by source row.

mod classify;
mod join;
mod melt;
mod normalize;
mod tag;

use finpivot_model::{PivotConfig, SchemaError, SlotFamily};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use crate::error::Result;

pub use classify::classify_columns;
pub use join::join_on_slot;
pub use melt::{melt_slots, resolve_slots};
pub use normalize::{drop_blank_labels, fold_amount_signs, normalize_pivoted};
pub use tag::tag_rows;

/// Internal column holding the source row position.
pub const ROW_ID_COLUMN: &str = "__finpivot_row_id";
/// Internal column holding the parsed slot index.
pub const SLOT_COLUMN: &str = "__finpivot_slot";
/// Internal column holding the melted column's original name.
pub const SOURCE_COLUMN: &str = "__finpivot_source_column";

/// Result of a pivot call.
#[derive(Debug, Clone)]
pub enum PivotOutcome {
    /// The long table, one row per populated allocation.
    Pivoted(DataFrame),
    /// The table lacks label or value columns; nothing was reshaped.
    NotApplicable {
        label_columns: usize,
        value_columns: usize,
    },
}

impl PivotOutcome {
    pub fn into_frame(self) -> Option<DataFrame> {
        match self {
            Self::Pivoted(df) => Some(df),
            Self::NotApplicable { .. } => None,
        }
    }
}

/// Reshape the slotted cost-center columns of `df` into long format.
///
/// Returns [`PivotOutcome::NotApplicable`] when either column family is
/// missing. Fails with a schema error, before producing any output, when a
/// slotted column name has no parseable slot index.
pub fn pivot_cost_centers(df: &DataFrame, config: &PivotConfig) -> Result<PivotOutcome> {
    let span = info_span!("pivot", rows = df.height(), columns = df.width());
    let _guard = span.enter();

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let groups = classify_columns(&names, config);
    debug!(
        label_columns = groups.label_columns.len(),
        value_columns = groups.value_columns.len(),
        identity_columns = groups.identity_columns.len(),
        "classified columns"
    );
    if !groups.is_pivotable() {
        warn!(
            label_columns = groups.label_columns.len(),
            value_columns = groups.value_columns.len(),
            "no cost-center columns to pivot"
        );
        return Ok(PivotOutcome::NotApplicable {
            label_columns: groups.label_columns.len(),
            value_columns: groups.value_columns.len(),
        });
    }

    ensure_unreserved(&groups.identity_columns, config)?;
    let labels = resolve_slots(&groups.label_columns, SlotFamily::Label)?;
    let values = resolve_slots(&groups.value_columns, SlotFamily::Value)?;

    let tagged = tag_rows(df)?;
    let label_long = melt_slots(&tagged, &labels, &groups.identity_columns, &config.label_output)?;
    let value_long = melt_slots(&tagged, &values, &groups.identity_columns, &config.value_output)?;
    debug!(
        label_rows = label_long.height(),
        value_rows = value_long.height(),
        "melted slot columns"
    );

    let joined = join_on_slot(&label_long, &value_long, &groups.identity_columns, config)?;
    let pivoted = normalize_pivoted(joined, config)?;
    info!(
        source_rows = df.height(),
        output_rows = pivoted.height(),
        "cost-center pivot complete"
    );
    Ok(PivotOutcome::Pivoted(pivoted))
}

/// Identity columns must not shadow the output or internal columns.
fn ensure_unreserved(identity: &[String], config: &PivotConfig) -> Result<()> {
    if config.label_output == config.value_output {
        return Err(SchemaError::ReservedColumn {
            column: config.value_output.clone(),
        }
        .into());
    }
    let reserved = [
        config.label_output.as_str(),
        config.value_output.as_str(),
        ROW_ID_COLUMN,
        SLOT_COLUMN,
        SOURCE_COLUMN,
    ];
    if let Some(column) = identity.iter().find(|name| reserved.contains(&name.as_str())) {
        return Err(SchemaError::ReservedColumn {
            column: column.clone(),
        }
        .into());
    }
    Ok(())
}
