//! Error types for the transformation passes.

use finpivot_model::SchemaError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by the pivot and the consolidation passes.
#[derive(Debug, Error)]
pub enum PivotError {
    /// The slotted column layout cannot be realigned.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Row positions no longer fit the 32-bit row identifier.
    #[error("table has {rows} rows, more than a pivot can tag")]
    TooManyRows { rows: usize },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] PolarsError),
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, PivotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_converts() {
        let err: PivotError = SchemaError::MissingSlotIndex {
            column: "Centro de Custo x".to_string(),
        }
        .into();
        assert!(matches!(err, PivotError::Schema(_)));
        assert!(err.to_string().contains("Centro de Custo x"));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = PolarsError::ColumnNotFound("paid".into());
        let err: PivotError = polars_err.into();
        assert!(matches!(err, PivotError::DataFrame(_)));
    }
}
