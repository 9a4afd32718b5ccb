use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// Position of a source record inside one pivot call.
///
/// Assigned when the pivot starts and discarded before it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u32);

impl RowId {
    pub const fn new(position: u32) -> Self {
        Self(position)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Slot number shared by a label column and its value column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SlotIndex(u32);

impl SlotIndex {
    pub const fn new(slot: u32) -> Self {
        Self(slot)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parse the slot from the trailing run of decimal digits in a column name.
    ///
    /// Trailing whitespace and a single closing bracket are ignored, so both
    /// `Centro de Custo 3` and `CostCenterLabel[3]` resolve to slot 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use finpivot_model::SlotIndex;
    ///
    /// assert_eq!(SlotIndex::from_column_name("Centro de Custo 2").unwrap().get(), 2);
    /// assert_eq!(SlotIndex::from_column_name("CostCenterValue[10]").unwrap().get(), 10);
    /// assert!(SlotIndex::from_column_name("CostCenterLabel[x]").is_err());
    /// ```
    pub fn from_column_name(column: &str) -> Result<Self, SchemaError> {
        let trimmed = column.trim_end();
        let trimmed = trimmed.strip_suffix(']').unwrap_or(trimmed);
        let stem = trimmed.trim_end_matches(|ch: char| ch.is_ascii_digit());
        let digits = &trimmed[stem.len()..];
        if digits.is_empty() {
            return Err(SchemaError::MissingSlotIndex {
                column: column.to_string(),
            });
        }
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| SchemaError::SlotIndexOutOfRange {
                column: column.to_string(),
            })
    }
}

/// Parse the slot index of a slotted column name.
///
/// Same contract as [`SlotIndex::from_column_name`].
pub fn parse_slot_index(column: &str) -> Result<SlotIndex, SchemaError> {
    SlotIndex::from_column_name(column)
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_from_space_separated_name() {
        let slot = SlotIndex::from_column_name("Valor no Centro de Custo 1").unwrap();
        assert_eq!(slot, SlotIndex::new(1));
    }

    #[test]
    fn test_slot_from_bracketed_name() {
        assert_eq!(
            SlotIndex::from_column_name("CostCenterLabel[0]").unwrap(),
            SlotIndex::new(0)
        );
        assert_eq!(
            SlotIndex::from_column_name("CostCenterLabel[12] ").unwrap(),
            SlotIndex::new(12)
        );
    }

    #[test]
    fn test_slot_keeps_leading_zeros_value() {
        assert_eq!(
            SlotIndex::from_column_name("Centro de Custo 007").unwrap(),
            SlotIndex::new(7)
        );
    }

    #[test]
    fn test_slot_missing_digits() {
        let err = SlotIndex::from_column_name("CostCenterLabel[x]").unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingSlotIndex {
                column: "CostCenterLabel[x]".to_string()
            }
        );
        assert!(SlotIndex::from_column_name("Centro de Custo").is_err());
        assert!(SlotIndex::from_column_name("").is_err());
    }

    #[test]
    fn test_slot_digits_must_be_trailing() {
        assert!(SlotIndex::from_column_name("Centro 1 de Custo").is_err());
    }

    #[test]
    fn test_slot_out_of_range() {
        let err = SlotIndex::from_column_name("Centro de Custo 99999999999").unwrap_err();
        assert!(matches!(err, SchemaError::SlotIndexOutOfRange { .. }));
    }

    #[test]
    fn test_row_id_ordering() {
        assert!(RowId::new(1) < RowId::new(2));
        assert_eq!(RowId::new(5).get(), 5);
    }
}
