use std::sync::Arc;

use oed_model::{ColumnSchema, EntityType, ErrorKind, Value};
use oed_standards::{MethodRegistry, SchemaStore, load_default_schema_store};
use oed_validate::{ProcessError, ValueResult, Validator};

fn validator() -> Validator {
    Validator::new(Arc::new(
        load_default_schema_store().expect("load schema store"),
    ))
}

fn validate(validator: &Validator, schema_type: &str, header: &str, raw: &[&str]) -> Vec<ValueResult> {
    let values = raw.iter().map(|v| Value::from(*v)).collect();
    validator
        .validate_column(schema_type, header, values)
        .expect("validate column")
        .collect()
}

fn single_kind(result: &ValueResult) -> Option<ErrorKind> {
    assert!(result.exceptions.len() <= 1, "more than one error for {:?}", result.value);
    result.exceptions.first().map(|e| e.error.kind)
}

#[test]
fn string_in_a_numeric_column_fails_only_its_row() {
    let validator = validator();
    let mut raw = vec!["1000"; 10];
    raw[1] = "abc";
    let results = validate(&validator, "loc", "BuildingTIV", &raw);

    assert_eq!(results.len(), 10);
    let bad = &results[1];
    assert_eq!(bad.row, 3);
    assert!(!bad.pass);
    assert_eq!(bad.exceptions.len(), 1);
    assert_eq!(bad.exceptions[0].row, 3);
    assert_eq!(bad.exceptions[0].error.kind, ErrorKind::InvalidDataType);
    assert_eq!(
        bad.exceptions[0].error.message,
        "Invalid data type for value \"abc\" in \"BuildingTIV\" - expected type \"float\", found type \"str\""
    );
    for (i, result) in results.iter().enumerate().filter(|(i, _)| *i != 1) {
        assert!(result.pass);
        assert_eq!(result.row, i + 2);
        assert_eq!(result.value, Value::Float(1000.0));
    }
}

#[test]
fn nulls_depend_on_the_column() {
    let validator = validator();
    let results = validate(&validator, "loc", "LocName", &["", "Head office"]);
    assert!(results.iter().all(|r| r.pass));

    let results = validator
        .validate_column("loc", "LocNumber", vec![Value::Null, Value::from("L1")])
        .expect("validate column")
        .collect::<Vec<_>>();
    assert_eq!(single_kind(&results[0]), Some(ErrorKind::NullDataInNonNullColumn));
    assert_eq!(
        results[0].exceptions[0].error.message,
        "Null value in \"LocNumber\" - this is a non-null column"
    );
    assert!(results[1].pass);
}

#[test]
fn type_errors_take_priority_over_range() {
    let validator = validator();
    let results = validate(&validator, "loc", "RoofCover", &["99.5", "1+2j", "14", "13", "0"]);
    let kinds: Vec<Option<ErrorKind>> = results.iter().map(single_kind).collect();
    assert_eq!(
        kinds,
        vec![
            Some(ErrorKind::InvalidDataType),
            Some(ErrorKind::InvalidDataType),
            Some(ErrorKind::DataOutOfRange),
            None,
            None
        ]
    );
    assert!(results[1].exceptions[0].error.message.ends_with("found type \"complex\""));
    assert_eq!(
        results[2].exceptions[0].error.message,
        "Invalid value \"14\" in \"RoofCover\" - check the column or data type range"
    );
}

#[test]
fn real_columns_accept_integers_within_bounds() {
    let validator = validator();
    let results = validate(&validator, "loc", "Latitude", &["45", "-90.0", "90.5", "north"]);
    assert_eq!(results[0].value, Value::Float(45.0));
    let kinds: Vec<Option<ErrorKind>> = results.iter().map(single_kind).collect();
    assert_eq!(
        kinds,
        vec![
            None,
            None,
            Some(ErrorKind::DataOutOfRange),
            Some(ErrorKind::InvalidDataType)
        ]
    );
}

#[test]
fn integer_columns_use_the_natural_range() {
    let validator = validator();
    let results = validate(&validator, "loc", "YearBuilt", &["1999", "65535", "65536", "-1"]);
    let kinds: Vec<Option<ErrorKind>> = results.iter().map(single_kind).collect();
    assert_eq!(
        kinds,
        vec![
            None,
            None,
            Some(ErrorKind::DataOutOfRange),
            Some(ErrorKind::DataOutOfRange)
        ]
    );
}

#[test]
fn integers_wider_than_i128_keep_their_type() {
    let validator = validator();
    let digits = "1234567890123456789012345678901234567890";

    let results = validate(&validator, "loc", "AccNumber", &[digits]);
    assert!(results[0].pass, "{:?}", results[0].exceptions);
    assert_eq!(results[0].value, Value::BigInt(digits.to_string()));

    let negative = format!("-{digits}");
    let results = validate(&validator, "loc", "YearBuilt", &[digits, &negative]);
    let kinds: Vec<Option<ErrorKind>> = results.iter().map(single_kind).collect();
    assert_eq!(
        kinds,
        vec![Some(ErrorKind::DataOutOfRange), Some(ErrorKind::DataOutOfRange)]
    );
    assert_eq!(
        results[0].exceptions[0].error.message,
        format!(
            "Invalid value \"{digits}\" in \"YearBuilt\" - check the column or data type range"
        )
    );

    let results = validate(&validator, "loc", "BuildingTIV", &[digits]);
    assert_eq!(single_kind(&results[0]), Some(ErrorKind::DataOutOfRange));
    assert!(matches!(results[0].value, Value::Float(_)));
}

#[test]
fn string_columns_accept_integers_and_enumerations() {
    let validator = validator();
    let results = validate(&validator, "loc", "LocNumber", &["42", "L-42", "4.2"]);
    let kinds: Vec<Option<ErrorKind>> = results.iter().map(single_kind).collect();
    assert_eq!(kinds, vec![None, None, Some(ErrorKind::InvalidDataType)]);

    let results = validate(&validator, "loc", "CountryCode", &["GB", "ZZ", "gb"]);
    let kinds: Vec<Option<ErrorKind>> = results.iter().map(single_kind).collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(ErrorKind::DataOutOfRange),
            Some(ErrorKind::DataOutOfRange)
        ]
    );
}

#[test]
fn validation_methods_replace_range_membership() {
    let validator = validator();
    let results = validate(
        &validator,
        "loc",
        "LocPerilsCovered",
        &["WTC;WSS", "QEQ", "WTC;WTC", "WTC;XYZ", "WTC;;WSS;"],
    );
    let kinds: Vec<Option<ErrorKind>> = results.iter().map(single_kind).collect();
    assert_eq!(
        kinds,
        vec![
            None,
            None,
            Some(ErrorKind::DataOutOfRange),
            Some(ErrorKind::DataOutOfRange),
            None
        ]
    );
}

#[test]
fn lookup_failures_yield_one_aggregate_result() {
    let validator = validator();
    let results = validate(&validator, "loc", "notacolumn", &["1", "2", "3"]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].row, 1);
    assert!(!results[0].pass);
    assert_eq!(single_kind(&results[0]), Some(ErrorKind::NonOedColumn));

    let results = validate(&validator, "master", "AccNumber", &["1"]);
    assert_eq!(single_kind(&results[0]), Some(ErrorKind::Oed));

    let results = validate(&validator, "policy", "AccNumber", &["1"]);
    assert_eq!(single_kind(&results[0]), Some(ErrorKind::NonOedSchema));
}

#[test]
fn untyped_columns_are_a_process_error() {
    let store = SchemaStore::new(
        vec![ColumnSchema::new(EntityType::Acc, "AccNotes")],
        Arc::new(MethodRegistry::builtin()),
    )
    .expect("build store");
    let validator = Validator::new(Arc::new(store));
    let err = validator
        .validate_column("acc", "AccNotes", vec![Value::from("x")])
        .expect_err("untyped column");
    assert!(matches!(
        err,
        ProcessError::UnsupportedDataType { entity: EntityType::Acc, .. }
    ));
}

#[test]
fn empty_columns_produce_no_results() {
    let validator = validator();
    assert!(validate(&validator, "acc", "AccNumber", &[]).is_empty());
}
