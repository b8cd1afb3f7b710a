use std::io::Write;
use std::sync::Arc;

use oed_ingest::{IngestError, Record};
use oed_model::{EntityType, ErrorKind};
use oed_standards::load_default_schema_store;
use oed_validate::{ColumnResult, DataSource, ProcessError, Validator};
use tempfile::NamedTempFile;

fn validator() -> Validator {
    Validator::new(Arc::new(
        load_default_schema_store().expect("load schema store"),
    ))
}

fn loc_row(loc_number: &str, building_tiv: Option<&str>) -> Record {
    Record::new()
        .with("PortNumber", Some("1"))
        .with("AccNumber", Some("A1"))
        .with("LocNumber", Some(loc_number))
        .with("CountryCode", Some("GB"))
        .with("LocPerilsCovered", Some("WTC;WSS"))
        .with("BuildingTIV", building_tiv)
        .with("OtherTIV", Some("0"))
        .with("ContentsTIV", Some("15000"))
        .with("BITIV", Some("0"))
        .with("LocCurrency", Some("GBP"))
}

fn result<'a>(results: &'a [ColumnResult], header: &str) -> &'a ColumnResult {
    results
        .iter()
        .find(|r| r.header == header)
        .unwrap_or_else(|| panic!("no result for {header}"))
}

#[test]
fn unknown_column_fails_the_file() {
    let validator = validator();
    let rows = vec![
        loc_row("L1", Some("220000")).with("notacolumn", Some("x")),
        loc_row("L2", Some("380000")).with("notacolumn", Some("y")),
    ];
    let report = validator
        .validate("loc", &DataSource::Rows(rows))
        .expect("validate rows");

    assert!(!report.pass);
    assert_eq!(report.entity, EntityType::Loc);
    assert_eq!(report.source, None);
    assert_eq!(report.raw_headers.len(), 11);

    let unknown = result(&report.results, "notacolumn");
    let kinds: Vec<ErrorKind> = unknown.exceptions.iter().map(|e| e.error.kind).collect();
    assert_eq!(
        kinds,
        vec![ErrorKind::NonOedColumn, ErrorKind::NonOedSchemaColumn]
    );
    assert!(unknown.values.is_empty());

    let passing: Vec<&ColumnResult> = report.results.iter().filter(|r| r.pass).collect();
    assert_eq!(passing.len(), 10);
    assert!(passing.iter().all(|r| r.values.len() == 2));
    assert_eq!(report.failures().count(), 1);
}

#[test]
fn value_errors_are_merged_into_their_column() {
    let validator = validator();
    let rows = vec![
        loc_row("L1", Some("220000")),
        loc_row("L2", None),
        loc_row("L3", Some("lots")),
        loc_row("L4", None),
    ];
    let (results, pass, raw_headers) = validator
        .validate("loc", &DataSource::Rows(rows))
        .expect("validate rows")
        .into_parts();

    assert!(!pass);
    assert_eq!(raw_headers[5], "BuildingTIV");
    let tiv = result(&results, "BuildingTIV");
    assert!(!tiv.pass);
    let located: Vec<(usize, ErrorKind)> = tiv
        .exceptions
        .iter()
        .map(|e| (e.row, e.error.kind))
        .collect();
    assert_eq!(
        located,
        vec![
            (3, ErrorKind::NullDataInNonNullColumn),
            (4, ErrorKind::InvalidDataType),
            (5, ErrorKind::NullDataInNonNullColumn)
        ]
    );
    assert_eq!(tiv.values.len(), 4);
    assert!(tiv.values[0].pass);
    assert!(
        results
            .iter()
            .filter(|r| r.header != "BuildingTIV")
            .all(|r| r.pass)
    );
}

#[test]
fn acc_file_missing_a_required_column() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "PortNumber,AccNumber,AccCurrency,PolPerilsCovered,PolLayerParticipation")
        .expect("write csv");
    writeln!(file, "1,A1,GBP,WTC;WSS,0.5").expect("write csv");
    writeln!(file, "1,A2,EUR,QEQ,1").expect("write csv");

    let validator = validator();
    let report = validator
        .validate("acc", &DataSource::File(file.path().to_path_buf()))
        .expect("validate file");

    assert!(!report.pass);
    assert_eq!(report.source.as_deref(), Some(file.path()));
    let missing = report.results.last().expect("results");
    assert_eq!(missing.header, "PolNumber");
    assert!(missing.required_but_missing);
    assert_eq!(missing.column_pos, None);
    assert_eq!(missing.exceptions.len(), 1);
    assert_eq!(missing.exceptions[0].error.kind, ErrorKind::MissingRequiredColumn);
    assert!(report.results[..5].iter().all(|r| r.pass));
    assert_eq!(report.exception_count(), 1);
}

#[test]
fn clean_file_passes() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "ReinsNumber,ReinsPeril,PlacedPercent,ReinsCurrency,InuringPriority,ReinsType,RiskLevel")
        .expect("write csv");
    writeln!(file, "1,WTC;WSS,1.0,USD,1,CXL,").expect("write csv");
    writeln!(file, "2,QEQ,0.75,USD,2,SS,LOC").expect("write csv");

    let validator = validator();
    let report = validator
        .validate("ReinsInfo", &DataSource::File(file.path().to_path_buf()))
        .expect("validate file");
    assert!(report.pass, "{:#?}", report.failures().collect::<Vec<_>>());
    assert_eq!(report.exception_count(), 0);

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["pass"], true);
    assert_eq!(json["entity"], "reinsinfo");
    assert_eq!(json["results"][0]["column_pos"], 1);
    assert_eq!(json["results"][0]["values"][1]["value"], 2);
}

#[test]
fn rows_match_by_header_not_field_order() {
    let validator = validator();
    let first = loc_row("L1", Some("220000"));
    let mut fields: Vec<(String, Option<String>)> = loc_row("L2", None)
        .headers()
        .map(ToString::to_string)
        .zip(loc_row("L2", None).values().map(|v| v.map(ToString::to_string)))
        .collect();
    fields.reverse();
    let reversed: Record = fields.into_iter().collect();
    assert_eq!(reversed.headers().next(), Some("LocCurrency"));

    let report = validator
        .validate("loc", &DataSource::Rows(vec![first, reversed]))
        .expect("validate rows");

    assert_eq!(report.raw_headers[0], "PortNumber");
    let loc_number = result(&report.results, "LocNumber");
    assert!(loc_number.pass);
    assert_eq!(loc_number.values[1].value, oed_model::Value::from("L2"));
    let tiv = result(&report.results, "BuildingTIV");
    let failures: Vec<(usize, ErrorKind)> = tiv
        .exceptions
        .iter()
        .map(|e| (e.row, e.error.kind))
        .collect();
    assert_eq!(failures, vec![(3, ErrorKind::NullDataInNonNullColumn)]);
}

#[test]
fn bad_input_is_a_process_error() {
    let validator = validator();
    assert!(matches!(
        validator.validate("loc", &DataSource::Rows(Vec::new())),
        Err(ProcessError::Ingest(IngestError::NoRows))
    ));

    let rows = vec![
        loc_row("L1", Some("1")),
        Record::new().with("LocNumber", Some("L2")),
    ];
    assert!(matches!(
        validator.validate("loc", &DataSource::Rows(rows)),
        Err(ProcessError::Ingest(IngestError::NonUniformRows { index: 1 }))
    ));

    assert!(matches!(
        validator.validate("exposure", &DataSource::Rows(vec![loc_row("L1", None)])),
        Err(ProcessError::UnknownFileType(_))
    ));
}
