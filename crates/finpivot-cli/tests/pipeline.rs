//! End-to-end runs of the command pipelines on files in a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use finpivot_cli::pipeline::{ConsolidateRequest, classify_file, consolidate_exports, pivot_file};
use finpivot_model::{PipelineConfig, PivotConfig};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn receivables(dir: &Path) -> PathBuf {
    write(
        dir,
        "receber.csv",
        "id,dueDate,paid,categoriesRatio.value,Centro de Custo 1,Valor no Centro de Custo 1\n\
         r1,15/03/2024,\"100,00\",\"120,00\",Vendas,\"100,00\"\n\
         ,,,,,\n",
    )
}

fn payables(dir: &Path) -> PathBuf {
    write(
        dir,
        "pagar.csv",
        "id,dueDate,paid,Centro de Custo 1,Valor no Centro de Custo 1,Centro de Custo 2,Valor no Centro de Custo 2\n\
         p1,2024-04-01,-40,Admin,-30,RH,-10\n",
    )
}

#[test]
fn test_consolidate_writes_both_tables() {
    let dir = TempDir::new().unwrap();
    let request = ConsolidateRequest {
        receivables: receivables(dir.path()),
        payables: payables(dir.path()),
        output_dir: dir.path().join("output"),
        dry_run: false,
    };

    let result = consolidate_exports(&request, &PipelineConfig::default()).unwrap();

    assert_eq!(result.summary.total_rows, 2);
    assert_eq!(result.corrected_ratios, 1);
    assert_eq!(result.normalized_date_columns, vec!["dueDate".to_string()]);
    assert_eq!(result.pivot_rows, Some(3));

    let consolidated = fs::read_to_string(dir.path().join("output/consolidated.csv")).unwrap();
    let header = consolidated.lines().next().unwrap();
    assert!(header.contains("tipo"));
    assert!(consolidated.contains("2024-03-15"));

    let pivoted = fs::read_to_string(dir.path().join("output/pivoted.csv")).unwrap();
    let lines: Vec<&str> = pivoted.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("CostCenterUnified,PaidAmount"));
    assert!(lines[1].ends_with("Vendas,100.0"));
    assert!(lines[2].ends_with("Admin,30.0"));
    assert!(lines[3].ends_with("RH,10.0"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let request = ConsolidateRequest {
        receivables: receivables(dir.path()),
        payables: payables(dir.path()),
        output_dir: dir.path().join("output"),
        dry_run: true,
    };

    let result = consolidate_exports(&request, &PipelineConfig::default()).unwrap();

    assert!(result.consolidated.is_none());
    assert!(result.pivoted.is_none());
    assert_eq!(result.pivot_rows, Some(3));
    assert!(!dir.path().join("output").exists());
}

#[test]
fn test_missing_input_reports_path() {
    let dir = TempDir::new().unwrap();
    let request = ConsolidateRequest {
        receivables: dir.path().join("missing.csv"),
        payables: payables(dir.path()),
        output_dir: dir.path().join("output"),
        dry_run: false,
    };

    let err = consolidate_exports(&request, &PipelineConfig::default()).unwrap_err();

    assert!(format!("{err:#}").contains("missing.csv"));
}

#[test]
fn test_pivot_file_with_custom_prefixes() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "wide.csv",
        "id,CostCenterLabel[0],CostCenterValue[0],CostCenterLabel[1],CostCenterValue[1]\n\
         r0,A,-50,B,30\n",
    );
    let output = dir.path().join("long.csv");
    let config = PivotConfig::default()
        .with_label_prefix("CostCenterLabel[")
        .with_value_prefix("CostCenterValue[");

    let result = pivot_file(&input, &output, &config).unwrap();

    assert_eq!(result.output_rows, Some(2));
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "id,CostCenterUnified,PaidAmount\nr0,A,50.0\nr0,B,30.0\n"
    );
}

#[test]
fn test_pivot_file_not_applicable_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "plain.csv", "id,description\nr0,Mensalidade\n");
    let output = dir.path().join("plain_pivoted.csv");

    let result = pivot_file(&input, &output, &PivotConfig::default()).unwrap();

    assert!(result.output.is_none());
    assert!(result.output_rows.is_none());
    assert!(!output.exists());
}

#[test]
fn test_pivot_file_schema_error() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "broken.csv",
        "Centro de Custo x,Valor no Centro de Custo 1\nA,1\n",
    );

    let err = pivot_file(&input, &dir.path().join("out.csv"), &PivotConfig::default()).unwrap_err();

    assert!(format!("{err:#}").contains("Centro de Custo x"));
}

#[test]
fn test_classify_file() {
    let dir = TempDir::new().unwrap();
    let input = payables(dir.path());

    let groups = classify_file(&input, &PivotConfig::default()).unwrap();

    assert_eq!(groups.label_columns.len(), 2);
    assert_eq!(groups.value_columns.len(), 2);
    assert_eq!(groups.identity_columns, vec!["id", "dueDate", "paid"]);
}
