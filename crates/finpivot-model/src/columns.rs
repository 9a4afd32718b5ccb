//! Column families of a flat cost-center export.

use std::fmt;

use crate::SlotIndex;

/// The two prefix families that make up a slotted cost-center layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotFamily {
    /// Cost-center name columns (`Centro de Custo N`).
    Label,
    /// Allocated amount columns (`Valor no Centro de Custo N`).
    Value,
}

impl fmt::Display for SlotFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label => f.write_str("label"),
            Self::Value => f.write_str("value"),
        }
    }
}

/// Partition of a table's column names produced by the classifier.
///
/// The three groups are disjoint, cover every input column, and keep the
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnGroups {
    pub label_columns: Vec<String>,
    pub value_columns: Vec<String>,
    pub identity_columns: Vec<String>,
}

impl ColumnGroups {
    /// True when both slotted families are present.
    pub fn is_pivotable(&self) -> bool {
        !self.label_columns.is_empty() && !self.value_columns.is_empty()
    }

    pub fn columns(&self, family: SlotFamily) -> &[String] {
        match family {
            SlotFamily::Label => &self.label_columns,
            SlotFamily::Value => &self.value_columns,
        }
    }
}

/// A slotted column with its parsed slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlottedColumn {
    pub name: String,
    pub slot: SlotIndex,
    pub family: SlotFamily,
}

/// One cost-center allocation of a record, read from a single slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostCenterAllocation {
    pub label: Option<String>,
    pub amount: Option<f64>,
}

impl CostCenterAllocation {
    /// True when the slot carries a non-blank cost-center label.
    pub fn is_populated(&self) -> bool {
        self.label
            .as_deref()
            .is_some_and(|label| !label.trim().is_empty())
    }
}
