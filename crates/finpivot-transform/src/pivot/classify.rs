//! Column classification by prefix family.

use finpivot_model::{ColumnGroups, PivotConfig};

/// Partition column names into label, value and identity groups.
///
/// A column is a value column when it starts with the value prefix, a label
/// column when it starts with the label prefix but not the value prefix, and
/// an identity column otherwise. The value check runs first so a value prefix
/// that extends the label prefix (`CostCenter` / `CostCenterValue`) still
/// classifies correctly. An empty prefix matches nothing.
pub fn classify_columns<S: AsRef<str>>(columns: &[S], config: &PivotConfig) -> ColumnGroups {
    let mut groups = ColumnGroups::default();
    for name in columns {
        let name = name.as_ref();
        if has_prefix(name, &config.value_prefix) {
            groups.value_columns.push(name.to_string());
        } else if has_prefix(name, &config.label_prefix) {
            groups.label_columns.push(name.to_string());
        } else {
            groups.identity_columns.push(name.to_string());
        }
    }
    groups
}

fn has_prefix(name: &str, prefix: &str) -> bool {
    !prefix.is_empty() && name.starts_with(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export_columns() -> Vec<&'static str> {
        vec![
            "id",
            "Centro de Custo 1",
            "paid",
            "Valor no Centro de Custo 1",
            "Centro de Custo 2",
            "Valor no Centro de Custo 2",
            "dueDate",
        ]
    }

    #[test]
    fn test_classify_export_prefixes() {
        let groups = classify_columns(&export_columns(), &PivotConfig::default());

        assert_eq!(
            groups.label_columns,
            vec!["Centro de Custo 1", "Centro de Custo 2"]
        );
        assert_eq!(
            groups.value_columns,
            vec!["Valor no Centro de Custo 1", "Valor no Centro de Custo 2"]
        );
        assert_eq!(groups.identity_columns, vec!["id", "paid", "dueDate"]);
        assert_eq!(
            groups.label_columns.len() + groups.value_columns.len() + groups.identity_columns.len(),
            export_columns().len()
        );
    }

    #[test]
    fn test_value_prefix_extending_label_prefix() {
        let config = PivotConfig::default()
            .with_label_prefix("CostCenter")
            .with_value_prefix("CostCenterValue");
        let columns = ["CostCenter[0]", "CostCenterValue[0]", "amount"];

        let groups = classify_columns(&columns, &config);

        assert_eq!(groups.label_columns, vec!["CostCenter[0]"]);
        assert_eq!(groups.value_columns, vec!["CostCenterValue[0]"]);
        assert_eq!(groups.identity_columns, vec!["amount"]);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let config = PivotConfig::default();
        let first = classify_columns(&export_columns(), &config);
        let second = classify_columns(&export_columns(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_slotted_columns() {
        let groups = classify_columns(&["id", "paid"], &PivotConfig::default());
        assert!(!groups.is_pivotable());
        assert_eq!(groups.identity_columns.len(), 2);
    }

    #[test]
    fn test_empty_prefix_matches_nothing() {
        let config = PivotConfig::default().with_value_prefix("");
        let groups = classify_columns(&export_columns(), &config);
        assert!(groups.value_columns.is_empty());
        // Value columns fall back to identity since they lack the label prefix.
        assert!(
            groups
                .identity_columns
                .contains(&"Valor no Centro de Custo 1".to_string())
        );
    }
}
