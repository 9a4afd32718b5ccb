//! Positional left join of the two melted tables.

use std::collections::HashMap;

use finpivot_model::{PivotConfig, RowId, SlotIndex};
use polars::prelude::{Column, DataFrame};

use super::{ROW_ID_COLUMN, SLOT_COLUMN};
use crate::error::Result;

type SlotKey = (RowId, SlotIndex);

/// Attach the matching amount to every label row.
///
/// Keys on `(RowId, SlotIndex)`. The output keeps every label row in its
/// original order; a label without a value slot gets a null amount. Only the
/// identity columns, the label column and the amount column survive.
pub fn join_on_slot(
    label_long: &DataFrame,
    value_long: &DataFrame,
    identity: &[String],
    config: &PivotConfig,
) -> Result<DataFrame> {
    let lookup = slot_lookup(value_long, &config.value_output)?;

    let row_ids = label_long.column(ROW_ID_COLUMN)?.u32()?;
    let slots = label_long.column(SLOT_COLUMN)?.u32()?;
    let amounts: Vec<Option<f64>> = row_ids
        .into_iter()
        .zip(slots)
        .map(|key| match key {
            (Some(row), Some(slot)) => lookup
                .get(&(RowId::new(row), SlotIndex::new(slot)))
                .copied()
                .flatten(),
            _ => None,
        })
        .collect();

    let mut keep: Vec<&str> = identity.iter().map(String::as_str).collect();
    keep.push(config.label_output.as_str());
    let mut joined = label_long.select(keep)?;
    joined.with_column(Column::new(config.value_output.as_str().into(), amounts))?;
    Ok(joined)
}

fn slot_lookup(value_long: &DataFrame, value_name: &str) -> Result<HashMap<SlotKey, Option<f64>>> {
    let row_ids = value_long.column(ROW_ID_COLUMN)?.u32()?;
    let slots = value_long.column(SLOT_COLUMN)?.u32()?;
    let amounts = value_long.column(value_name)?.f64()?;

    let mut lookup = HashMap::with_capacity(value_long.height());
    for ((row, slot), amount) in row_ids.into_iter().zip(slots).zip(amounts) {
        if let (Some(row), Some(slot)) = (row, slot) {
            lookup.insert((RowId::new(row), SlotIndex::new(slot)), amount);
        }
    }
    Ok(lookup)
}
