use std::fs;
use std::path::{Path, PathBuf};

use tautiba_standards::{
    SourcePaths, StandardsError, load_classifier, load_reference_data, load_territory_table,
};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn classifier_skips_invalid_rows_and_keeps_last_duplicate() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(
        dir.path(),
        "taut.csv",
        "Kods,Nosaukums\n1,Latvieši\n,Bez koda\nabc,Nederīgs\n17,krievi\n\n18,\n17, Krievi \n",
    );

    let lookup = load_classifier(&path).expect("load classifier");

    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.get(1), Some("Latvieši"));
    assert_eq!(lookup.get(17), Some("Krievi"));
    assert_eq!(lookup.get(18), None);
}

#[test]
fn classifier_without_expected_columns_is_empty_not_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(dir.path(), "odd.csv", "Code,Name\n1,One\n");

    let lookup = load_classifier(&path).expect("load classifier");

    assert!(lookup.is_empty());
}

#[test]
fn missing_classifier_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = load_classifier(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(error, StandardsError::Io { .. }), "{error}");
}

#[test]
fn territory_table_detects_each_delimiter() {
    let dir = tempfile::tempdir().expect("temp dir");
    for (name, sep) in [("comma.csv", ","), ("semi.csv", ";"), ("tab.csv", "\t")] {
        let contents = format!(
            "ValueCode{sep}ValueTextL{sep}ValueTextL_Eng\nLV0001000{sep}Rīga{sep}Riga\nLV0002000{sep}Daugavpils{sep}\n"
        );
        let path = write(dir.path(), name, &contents);

        let table = load_territory_table(&path).expect("load territories");

        assert_eq!(table.len(), 2, "{name}");
        let riga = table.get("LV0001000").expect("riga");
        assert_eq!(riga.local.as_deref(), Some("Rīga"));
        assert_eq!(riga.alternate.as_deref(), Some("Riga"));
        let daugavpils = table.get("LV0002000").expect("daugavpils");
        assert_eq!(daugavpils.local.as_deref(), Some("Daugavpils"));
        assert_eq!(daugavpils.alternate, None);
    }
}

#[test]
fn territory_table_reports_last_failure_when_no_delimiter_fits() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(dir.path(), "bad.csv", "Code|Name\nLV0001000|Rīga\n");

    let error = load_territory_table(&path).unwrap_err();

    match error {
        StandardsError::NoDelimiter { last, .. } => {
            assert!(
                matches!(*last, StandardsError::MissingColumn { ref column, .. } if column == "ValueCode")
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reference_data_bundle_loads_all_tables() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "TAUT2016_11012026_015802.csv", "Kods,Nosaukums\n17,Krievi\n");
    write(dir.path(), "ATVK2021_11012026_015924.csv", "Kods,Nosaukums\n1000,Rīga\n");
    write(
        dir.path(),
        "territories.csv",
        "ValueCode;ValueTextL;ValueTextL_Eng\nLV0001000;Rīga;Riga\n",
    );
    let paths = SourcePaths::in_dir(dir.path());

    let reference = load_reference_data(&paths).expect("load reference data");

    assert_eq!(reference.ethnic.get(17), Some("Krievi"));
    assert_eq!(reference.territorial.get(1000), Some("Rīga"));
    assert_eq!(reference.territories.len(), 1);
    assert_eq!(reference.ethnicity_xref.get("E_RUS"), Some(17));
}

#[test]
fn reference_data_without_territories_uses_empty_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "TAUT2016_11012026_015802.csv", "Kods,Nosaukums\n");
    write(dir.path(), "ATVK2021_11012026_015924.csv", "Kods,Nosaukums\n");
    let paths = SourcePaths {
        territories: None,
        ..SourcePaths::in_dir(dir.path())
    };

    let reference = load_reference_data(&paths).expect("load reference data");

    assert!(reference.territories.is_empty());
}
