//! Dual melt of the label and value column families.

use std::collections::HashMap;

use finpivot_common::{amount_values, label_values};
use finpivot_model::{SchemaError, SlotFamily, SlotIndex, SlottedColumn, parse_slot_index};
use polars::prelude::{Column, DataFrame};
use tracing::debug;

use super::{ROW_ID_COLUMN, SLOT_COLUMN, SOURCE_COLUMN};
use crate::error::Result;

/// Parse the slot of every column in one family.
///
/// Fails on the first column without a trailing slot index. Value columns
/// must also resolve to distinct slots, otherwise a label could match more
/// than one amount.
pub fn resolve_slots(columns: &[String], family: SlotFamily) -> Result<Vec<SlottedColumn>> {
    let mut resolved = Vec::with_capacity(columns.len());
    let mut seen: HashMap<SlotIndex, &str> = HashMap::new();
    for name in columns {
        let slot = parse_slot_index(name)?;
        if family == SlotFamily::Value
            && let Some(first) = seen.insert(slot, name.as_str())
        {
            return Err(SchemaError::DuplicateSlot {
                first: first.to_string(),
                second: name.clone(),
                slot,
            }
            .into());
        }
        resolved.push(SlottedColumn {
            name: name.clone(),
            slot,
            family,
        });
    }
    debug!(%family, columns = resolved.len(), "resolved slot columns");
    Ok(resolved)
}

/// Unpivot slotted columns into a long table.
///
/// Each slotted column contributes one block of `tagged.height()` rows
/// carrying the row id, the identity columns, the source column name, the
/// cell (as a string for labels, as `f64` for values) under `value_name`, and
/// the slot. Blocks are stacked in column order, so the output has
/// `rows × columns` rows ordered by column first, then by source row.
pub fn melt_slots(
    tagged: &DataFrame,
    slotted: &[SlottedColumn],
    identity: &[String],
    value_name: &str,
) -> Result<DataFrame> {
    let mut blocks = slotted
        .iter()
        .map(|column| melt_block(tagged, column, identity, value_name));
    let mut long = match blocks.next() {
        Some(first) => first?,
        None => return Ok(DataFrame::empty()),
    };
    for block in blocks {
        long.vstack_mut(&block?)?;
    }
    long.as_single_chunk_par();
    Ok(long)
}

fn melt_block(
    tagged: &DataFrame,
    column: &SlottedColumn,
    identity: &[String],
    value_name: &str,
) -> Result<DataFrame> {
    let height = tagged.height();
    let mut columns: Vec<Column> = Vec::with_capacity(identity.len() + 4);
    columns.push(tagged.column(ROW_ID_COLUMN)?.clone());
    for name in identity {
        columns.push(tagged.column(name)?.clone());
    }
    columns.push(Column::new(
        SOURCE_COLUMN.into(),
        vec![column.name.as_str(); height],
    ));

    let source = tagged.column(&column.name)?;
    let cells = match column.family {
        SlotFamily::Label => Column::new(value_name.into(), label_values(source)?),
        SlotFamily::Value => Column::new(value_name.into(), amount_values(source)?),
    };
    columns.push(cells);
    columns.push(Column::new(SLOT_COLUMN.into(), vec![column.slot.get(); height]));

    Ok(DataFrame::new(columns)?)
}
