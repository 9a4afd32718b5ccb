//! Row identity tagging.

use finpivot_model::RowId;
use polars::prelude::{Column, DataFrame};

use super::ROW_ID_COLUMN;
use crate::error::{PivotError, Result};

/// Return a copy of `df` with a zero-based row position column appended.
///
/// The input frame is left untouched; the clone shares its buffers.
pub fn tag_rows(df: &DataFrame) -> Result<DataFrame> {
    let height = u32::try_from(df.height())
        .map_err(|_| PivotError::TooManyRows { rows: df.height() })?;
    let ids: Vec<u32> = (0..height).map(|position| RowId::new(position).get()).collect();

    let mut tagged = df.clone();
    tagged.with_column(Column::new(ROW_ID_COLUMN.into(), ids))?;
    Ok(tagged)
}
