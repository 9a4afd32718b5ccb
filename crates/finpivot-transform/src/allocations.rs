//! Typed per-record view of the slotted cost-center columns.

use std::collections::BTreeMap;

use finpivot_common::{amount_values, label_values};
use finpivot_model::{CostCenterAllocation, PivotConfig, SlotFamily, SlotIndex};
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::pivot::{classify_columns, resolve_slots};

/// Allocations of one record, keyed by slot.
pub type RecordAllocations = BTreeMap<SlotIndex, CostCenterAllocation>;

/// Read every record's slotted columns into a map from slot to allocation.
///
/// Returns one map per row, in row order. Slots whose columns exist get an
/// entry even when the cells are empty. Slot parsing follows the same rules
/// as the pivot, including the duplicate value slot check.
pub fn slot_allocations(df: &DataFrame, config: &PivotConfig) -> Result<Vec<RecordAllocations>> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let groups = classify_columns(&names, config);
    let labels = resolve_slots(&groups.label_columns, SlotFamily::Label)?;
    let values = resolve_slots(&groups.value_columns, SlotFamily::Value)?;

    let mut records = vec![RecordAllocations::new(); df.height()];
    for column in &labels {
        let cells = label_values(df.column(&column.name)?)?;
        for (record, label) in records.iter_mut().zip(cells) {
            let entry = record.entry(column.slot).or_default();
            if entry.label.is_none() {
                entry.label = label;
            }
        }
    }
    for column in &values {
        let cells = amount_values(df.column(&column.name)?)?;
        for (record, amount) in records.iter_mut().zip(cells) {
            record.entry(column.slot).or_default().amount = amount;
        }
    }
    Ok(records)
}
