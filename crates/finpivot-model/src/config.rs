//! Naming conventions for the consolidation and pivot steps.
//!
//! All structs deserialize with `#[serde(default)]`, so a partial JSON file
//! only overrides the keys it names.

use serde::{Deserialize, Serialize};

/// Prefix of cost-center label columns in the financial exports.
pub const DEFAULT_LABEL_PREFIX: &str = "Centro de Custo ";
/// Prefix of cost-center amount columns in the financial exports.
pub const DEFAULT_VALUE_PREFIX: &str = "Valor no Centro de Custo ";
/// Output column holding the unified cost-center label.
pub const DEFAULT_LABEL_OUTPUT: &str = "CostCenterUnified";
/// Output column holding the allocated amount.
pub const DEFAULT_VALUE_OUTPUT: &str = "PaidAmount";

/// Column naming used by the cost-center pivot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotConfig {
    pub label_prefix: String,
    pub value_prefix: String,
    pub label_output: String,
    pub value_output: String,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            value_prefix: DEFAULT_VALUE_PREFIX.to_string(),
            label_output: DEFAULT_LABEL_OUTPUT.to_string(),
            value_output: DEFAULT_VALUE_OUTPUT.to_string(),
        }
    }
}

impl PivotConfig {
    #[must_use]
    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_value_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.value_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_outputs(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_output = label.into();
        self.value_output = value.into();
        self
    }
}

/// Field names used when merging receivables and payables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidateConfig {
    /// Column tagging each record with its source export.
    pub type_column: String,
    pub receivable_label: String,
    pub payable_label: String,
    /// Columns rewritten to `YYYY-MM-DD`.
    pub date_columns: Vec<String>,
    /// Allocation column capped at the paid amount.
    pub ratio_column: String,
    pub paid_column: String,
    /// Column whose distinct values are reported in the summary.
    pub summary_cost_center_column: String,
}

impl Default for ConsolidateConfig {
    fn default() -> Self {
        Self {
            type_column: "tipo".to_string(),
            receivable_label: "Receita".to_string(),
            payable_label: "Despesa".to_string(),
            date_columns: vec![
                "lastAcquittanceDate".to_string(),
                "financialEvent.competenceDate".to_string(),
                "dueDate".to_string(),
            ],
            ratio_column: "categoriesRatio.value".to_string(),
            paid_column: "paid".to_string(),
            summary_cost_center_column: "categoriesRatio.costCentersRatio.0.costCenter"
                .to_string(),
        }
    }
}

/// Full configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub pivot: PivotConfig,
    pub consolidate: ConsolidateConfig,
}
