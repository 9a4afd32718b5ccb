//! Integration tests for export loading.

use std::fs;

use finpivot_ingest::{IngestError, read_csv_table};
use tempfile::tempdir;

#[test]
fn reads_quoted_export_with_dotted_headers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contas_a_pagar.csv");
    fs::write(
        &path,
        "id,financialEvent.competenceDate,description,Centro de Custo 1,Valor no Centro de Custo 1\n\
         10,15/03/2024,\"Aluguel, março\",Administrativo,\"-1.200,00\"\n\
         11,,Energia,,\n",
    )
    .unwrap();

    let df = read_csv_table(&path).unwrap();

    assert_eq!(df.height(), 2);
    let description = df.column("description").unwrap().str().unwrap();
    assert_eq!(description.get(0), Some("Aluguel, março"));
    let amount = df.column("Valor no Centro de Custo 1").unwrap().str().unwrap();
    assert_eq!(amount.get(0), Some("-1.200,00"));
    assert_eq!(amount.get(1), None);
}

#[test]
fn header_only_export_has_no_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vazio.csv");
    fs::write(&path, "id,paid\n").unwrap();

    let df = read_csv_table(&path).unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn error_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.csv");

    let err = read_csv_table(&path).unwrap_err();

    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("missing.csv"));
}
