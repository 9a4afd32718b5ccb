use thiserror::Error;

use crate::ids::SlotIndex;

/// A slotted column layout the pivot cannot realign safely.
///
/// Every variant names the offending column so callers can report it
/// without inspecting the input table again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The column name has no trailing run of decimal digits.
    #[error("column '{column}' has no trailing slot index")]
    MissingSlotIndex { column: String },

    /// The trailing digit run does not fit a slot index.
    #[error("slot index of column '{column}' is out of range")]
    SlotIndexOutOfRange { column: String },

    /// Two value columns resolve to the same slot.
    #[error("value columns '{first}' and '{second}' both resolve to slot {slot}")]
    DuplicateSlot {
        first: String,
        second: String,
        slot: SlotIndex,
    },

    /// An identity column collides with a column the pivot writes or uses internally.
    #[error("column '{column}' is reserved by the pivot output")]
    ReservedColumn { column: String },
}

impl SchemaError {
    /// Name of the column that triggered the error.
    pub fn column(&self) -> &str {
        match self {
            Self::MissingSlotIndex { column }
            | Self::SlotIndexOutOfRange { column }
            | Self::ReservedColumn { column } => column,
            Self::DuplicateSlot { second, .. } => second,
        }
    }
}
