use std::fs;
use std::path::Path;

use oed_model::{DataType, EntityType, ValueRange};
use oed_standards::hash::sha256_hex;
use oed_standards::{StandardsError, load_default_schema_store, standards_root, verify_and_load};

#[test]
fn loads_default_schema_store() {
    let store = load_default_schema_store().expect("load schema store");
    assert_eq!(store.version(), Some("1.0.3"));
    for entity in EntityType::ALL {
        assert!(
            store.columns(entity).next().is_some(),
            "no columns for {entity}"
        );
    }
}

#[test]
fn summary_counts_columns_per_file_type() {
    let (store, summary) = verify_and_load(&standards_root()).expect("verify standards");
    assert_eq!(summary.file_count, 1);
    assert_eq!(summary.manifest_pins.oed, "1.0.3");
    let total: usize = summary.column_counts.values().sum();
    assert_eq!(total, store.len());
}

#[test]
fn sql_types_set_declared_types_and_ranges() {
    let store = load_default_schema_store().expect("load schema store");

    let tiv = store.column(EntityType::Loc, "BuildingTIV").expect("BuildingTIV");
    assert_eq!(tiv.data_type, Some(DataType::Real));
    assert!(!tiv.nullable);
    assert!(matches!(tiv.dtype_range, Some(ValueRange::Interval { .. })));

    let roof = store.column(EntityType::Loc, "RoofCover").expect("RoofCover");
    assert_eq!(roof.data_type, Some(DataType::Integer));
    assert_eq!(
        roof.dtype_range,
        Some(ValueRange::HalfOpen { start: 0, stop: 256 })
    );
    assert_eq!(
        roof.column_range.as_ref().map(ValueRange::int_members),
        Some((0..=13).collect())
    );

    let perils = store
        .column(EntityType::Acc, "polperilscovered")
        .expect("PolPerilsCovered");
    assert_eq!(perils.validation.as_deref(), Some("token_sequence"));
    assert_eq!(
        perils.sampling.as_ref().map(|s| s.args.clone()),
        Some(vec!["3".to_string()])
    );
}

#[test]
fn required_columns_per_file_type() {
    let store = load_default_schema_store().expect("load schema store");
    let mut acc = store.required_columns(EntityType::Acc);
    acc.sort_unstable();
    assert_eq!(
        acc,
        vec!["AccCurrency", "AccNumber", "PolNumber", "PolPerilsCovered", "PortNumber"]
    );
    assert_eq!(store.required_columns(EntityType::ReinsScope), vec!["ReinsNumber"]);
}

fn copy_standards(target: &Path) {
    let source = standards_root();
    fs::create_dir_all(target.join("oed/v1_0_3")).expect("create dirs");
    fs::copy(source.join("manifest.toml"), target.join("manifest.toml")).expect("copy manifest");
    fs::copy(
        source.join("oed/v1_0_3/Columns.csv"),
        target.join("oed/v1_0_3/Columns.csv"),
    )
    .expect("copy columns");
}

#[test]
fn rejects_tampered_columns_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_standards(dir.path());
    let columns = dir.path().join("oed/v1_0_3/Columns.csv");
    let mut contents = fs::read_to_string(&columns).expect("read columns");
    contents.push_str("Loc,Extra,Extra column,O,Yes,nvarchar(10),,,,,\n");
    fs::write(&columns, contents).expect("write columns");

    let err = verify_and_load(dir.path()).expect_err("checksum mismatch");
    assert!(matches!(err, StandardsError::Sha256Mismatch { .. }));
}

#[test]
fn rejects_unknown_methods() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_standards(dir.path());
    let columns = dir.path().join("oed/v1_0_3/Columns.csv");
    let contents = fs::read_to_string(&columns)
        .expect("read columns")
        .replace("token_sequence,token_sequence", "token_sequence,peril_walk");
    fs::write(&columns, &contents).expect("write columns");

    let manifest_path = dir.path().join("manifest.toml");
    let manifest = fs::read_to_string(&manifest_path).expect("read manifest");
    let original = sha256_hex(&fs::read(standards_root().join("oed/v1_0_3/Columns.csv")).expect("read"));
    let manifest = manifest.replace(&original, &sha256_hex(contents.as_bytes()));
    fs::write(&manifest_path, manifest).expect("write manifest");

    let err = verify_and_load(dir.path()).expect_err("unknown method");
    assert!(matches!(
        err,
        StandardsError::UnknownMethod { kind: "sampling", .. }
    ));
}

#[test]
fn missing_manifest_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = verify_and_load(dir.path()).expect_err("no manifest");
    assert!(matches!(err, StandardsError::Io { .. }));
}
