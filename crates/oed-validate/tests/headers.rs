use std::io::Write;
use std::sync::Arc;

use oed_model::ErrorKind;
use oed_standards::load_default_schema_store;
use oed_validate::{HeaderResult, HeaderSource, ProcessError, Validator};
use tempfile::NamedTempFile;

const LOC_REQUIRED: &[&str] = &[
    "PortNumber",
    "AccNumber",
    "LocNumber",
    "CountryCode",
    "LocPerilsCovered",
    "BuildingTIV",
    "OtherTIV",
    "ContentsTIV",
    "BITIV",
    "LocCurrency",
];

fn validator() -> Validator {
    Validator::new(Arc::new(
        load_default_schema_store().expect("load schema store"),
    ))
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn kinds(result: &HeaderResult) -> Vec<ErrorKind> {
    result.exceptions.iter().map(|e| e.error.kind).collect()
}

#[test]
fn complete_headers_all_pass() {
    let validator = validator();
    let mut names = LOC_REQUIRED.to_vec();
    names.extend(["LocName", "RoofCover", "Latitude"]);
    let results: Vec<HeaderResult> = validator
        .validate_headers("loc", headers(&names))
        .expect("validate headers")
        .collect();

    assert_eq!(results.len(), names.len());
    for result in &results {
        assert!(result.pass, "{} failed", result.header);
        assert!(result.exceptions.is_empty());
        assert!(!result.required_but_missing);
        assert_eq!(result.row, 1);
    }
}

#[test]
fn unknown_header_gets_both_column_errors() {
    let validator = validator();
    let mut names = LOC_REQUIRED.to_vec();
    names.push("notacolumn");
    let results: Vec<HeaderResult> = validator
        .validate_headers("loc", headers(&names))
        .expect("validate headers")
        .collect();

    let unknown = results.last().expect("results");
    assert_eq!(unknown.header, "notacolumn");
    assert!(!unknown.pass);
    assert_eq!(
        kinds(unknown),
        vec![ErrorKind::NonOedColumn, ErrorKind::NonOedSchemaColumn]
    );
    assert_eq!(
        unknown.exceptions[1].error.message,
        "\"notacolumn\" is an invalid column in the OED \"loc\" schema"
    );
    assert!(results[..LOC_REQUIRED.len()].iter().all(|r| r.pass));
}

#[test]
fn header_from_another_file_type() {
    let validator = validator();
    let mut names = LOC_REQUIRED.to_vec();
    names.push("PolNumber");
    let results: Vec<HeaderResult> = validator
        .validate_headers("loc", headers(&names))
        .expect("validate headers")
        .collect();
    let pol = results.last().expect("results");
    assert_eq!(kinds(pol), vec![ErrorKind::NonOedSchemaColumn]);
}

#[test]
fn missing_required_columns_are_appended_in_name_order() {
    let validator = validator();
    let results: Vec<HeaderResult> = validator
        .validate_headers("LOC", headers(&["locnumber", "LocName"]))
        .expect("validate headers")
        .collect();

    assert!(results[0].pass);
    assert!(results[1].pass);
    let missing: Vec<&str> = results[2..].iter().map(|r| r.header.as_str()).collect();
    assert_eq!(
        missing,
        vec![
            "AccNumber",
            "BITIV",
            "BuildingTIV",
            "ContentsTIV",
            "CountryCode",
            "LocCurrency",
            "LocPerilsCovered",
            "OtherTIV",
            "PortNumber"
        ]
    );
    for result in &results[2..] {
        assert!(result.required_but_missing);
        assert!(!result.pass);
        assert_eq!(result.column_pos, None);
        assert_eq!(kinds(result), vec![ErrorKind::MissingRequiredColumn]);
    }
}

#[test]
fn acc_file_missing_one_required_column() {
    let validator = validator();
    let results: Vec<HeaderResult> = validator
        .validate_headers(
            "acc",
            headers(&["PortNumber", "AccNumber", "AccCurrency", "PolPerilsCovered"]),
        )
        .expect("validate headers")
        .collect();

    assert_eq!(results.len(), 5);
    let missing = &results[4];
    assert_eq!(missing.header, "PolNumber");
    assert!(missing.required_but_missing);
    assert_eq!(missing.column_pos, None);
    assert_eq!(missing.exceptions.len(), 1);
    assert_eq!(
        missing.exceptions[0].error.message,
        "\"PolNumber\" is a required column in an OED \"acc\" file but is missing"
    );
}

#[test]
fn column_positions_index_the_joined_header_line() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "ReinsNumber,ReinsPeril,PlacedPercent").expect("write csv");
    writeln!(file, "1,WTC,1.0").expect("write csv");

    let validator = validator();
    let results: Vec<HeaderResult> = validator
        .validate_headers("reinsinfo", HeaderSource::File(file.path().to_path_buf()))
        .expect("validate headers")
        .collect();

    let positions: Vec<Option<usize>> = results.iter().map(|r| r.column_pos).collect();
    assert_eq!(positions[..3], [Some(1), Some(13), Some(24)]);
    assert!(results[3..].iter().all(|r| r.required_but_missing));
}

#[test]
fn results_are_produced_lazily() {
    let validator = validator();
    let mut results = validator
        .validate_headers("acc", headers(&["notacolumn", "AccNumber"]))
        .expect("validate headers");
    assert_eq!(results.len(), 2 + 4);
    let first = results.next().expect("first result");
    assert!(!first.pass);
    assert_eq!(results.len(), 5);
}

#[test]
fn process_errors() {
    let validator = validator();
    assert!(matches!(
        validator.validate_headers("portfolio", headers(&["AccNumber"])),
        Err(ProcessError::UnknownFileType(_))
    ));
    assert!(matches!(
        validator.validate_headers("master", headers(&["AccNumber"])),
        Err(ProcessError::UnknownFileType(_))
    ));
    assert!(matches!(
        validator.validate_headers("loc", Vec::<String>::new()),
        Err(ProcessError::InvalidInput(_))
    ));
    assert!(matches!(
        validator.validate_headers(
            "loc",
            HeaderSource::File("/nonexistent/SourceLoc.csv".into())
        ),
        Err(ProcessError::Ingest(_))
    ));
}

#[test]
fn results_borrow_only_the_store() {
    let store = load_default_schema_store().expect("load schema store");
    let results = {
        let schema_type = String::from("ReinsScope");
        oed_validate::validate_headers(&store, &schema_type, headers(&["ReinsNumber"]).into())
            .expect("validate headers")
    };
    let collected: Vec<HeaderResult> = results.collect();
    assert_eq!(collected.len(), 1);
    assert!(collected[0].pass);
    assert_eq!(collected[0].column_pos, Some(1));
}
