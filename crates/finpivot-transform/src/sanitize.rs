//! Corrections applied to consolidated records before export.

use finpivot_common::{amount_values, string_values};
use polars::prelude::{Column, DataFrame, DataType};
use tracing::debug;

use crate::error::Result;

/// Cap the category ratio at the paid amount.
///
/// Rows where both cells parse as numbers and the ratio exceeds the paid
/// amount take the paid amount. A string ratio column stays a string column
/// and receives the paid cell's text. Returns the number of corrected rows;
/// a missing column corrects nothing.
pub fn cap_ratio_to_paid(df: &mut DataFrame, ratio_column: &str, paid_column: &str) -> Result<usize> {
    let (Ok(ratio), Ok(paid)) = (df.column(ratio_column), df.column(paid_column)) else {
        debug!(ratio_column, paid_column, "ratio correction skipped, column missing");
        return Ok(0);
    };

    let over: Vec<bool> = amount_values(ratio)?
        .into_iter()
        .zip(amount_values(paid)?)
        .map(|pair| matches!(pair, (Some(ratio), Some(paid)) if ratio > paid))
        .collect();
    let corrected = over.iter().filter(|flag| **flag).count();
    if corrected == 0 {
        return Ok(0);
    }

    let replacement = if ratio.dtype() == &DataType::String {
        let capped: Vec<Option<String>> = string_values(ratio)?
            .into_iter()
            .zip(string_values(paid)?)
            .zip(&over)
            .map(|((ratio, paid), over)| if *over { paid } else { ratio })
            .collect();
        Column::new(ratio_column.into(), capped)
    } else {
        let capped: Vec<Option<f64>> = amount_values(ratio)?
            .into_iter()
            .zip(amount_values(paid)?)
            .zip(&over)
            .map(|((ratio, paid), over)| if *over { paid } else { ratio })
            .collect();
        Column::new(ratio_column.into(), capped)
    };
    df.with_column(replacement)?;
    debug!(corrected, "capped category ratios at paid amount");
    Ok(corrected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_string_ratio() {
        let mut df = DataFrame::new(vec![
            Column::new(
                "categoriesRatio.value".into(),
                vec![Some("150,00"), Some("20"), None, Some("abc")],
            ),
            Column::new("paid".into(), vec![Some("100,00"), Some("30"), Some("5"), Some("1")]),
        ])
        .unwrap();

        let corrected = cap_ratio_to_paid(&mut df, "categoriesRatio.value", "paid").unwrap();

        assert_eq!(corrected, 1);
        let ratios = string_values(df.column("categoriesRatio.value").unwrap()).unwrap();
        assert_eq!(
            ratios,
            vec![
                Some("100,00".to_string()),
                Some("20".to_string()),
                None,
                Some("abc".to_string())
            ]
        );
    }

    #[test]
    fn test_caps_numeric_ratio() {
        let mut df = DataFrame::new(vec![
            Column::new("ratio".into(), vec![10.0f64, 2.0]),
            Column::new("paid".into(), vec![4.0f64, 3.0]),
        ])
        .unwrap();
        assert_eq!(cap_ratio_to_paid(&mut df, "ratio", "paid").unwrap(), 1);
        let ratios: Vec<Option<f64>> = df.column("ratio").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(ratios, vec![Some(4.0), Some(2.0)]);
    }

    #[test]
    fn test_missing_column_is_noop() {
        let mut df = DataFrame::new(vec![Column::new("paid".into(), vec!["1"])]).unwrap();
        assert_eq!(cap_ratio_to_paid(&mut df, "categoriesRatio.value", "paid").unwrap(), 0);
        assert_eq!(df.width(), 1);
    }
}
