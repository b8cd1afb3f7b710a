use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use oed_model::Value;
use oed_standards::{
    ColumnQuery, SchemaStore, VerifySummary, resolve_standards_dir, sample_column, verify_and_load,
};
use oed_validate::{DataSource, HeaderResult, HeaderSource, Validator};

use oed_cli::report::{file_report_lines, header_report_lines};

use crate::cli::{FileArgs, HeadersArgs, QueryArgs, SampleArgs};
use crate::summary::{query_table, standards_table};

/// Load and verify the standards directory, defaulting to the configured root.
pub fn load_standards(standards_dir: Option<&Path>) -> Result<(SchemaStore, VerifySummary)> {
    let dir = resolve_standards_dir(standards_dir);
    debug!(standards_dir = %dir.display(), "loading standards");
    verify_and_load(&dir).with_context(|| format!("load standards from {}", dir.display()))
}

fn load_validator(standards_dir: Option<&Path>) -> Result<Validator> {
    let (store, _) = load_standards(standards_dir)?;
    Ok(Validator::new(Arc::new(store)))
}

/// Returns whether every header passed.
pub fn run_validate_headers(args: &HeadersArgs, standards_dir: Option<&Path>) -> Result<bool> {
    let validator = load_validator(standards_dir)?;
    let (source, label) = match &args.file {
        Some(path) => (
            HeaderSource::File(path.clone()),
            path.display().to_string(),
        ),
        None => (HeaderSource::Headers(args.headers.clone()), String::new()),
    };
    let results: Vec<HeaderResult> = validator
        .validate_headers(&args.file_type, source)
        .with_context(|| format!("validate {} headers", args.file_type))?
        .collect();

    for line in header_report_lines(&label, &results) {
        println!("{line}");
    }
    let pass = results.iter().all(|r| r.pass);
    info!(headers = results.len(), pass, "header validation complete");
    Ok(pass)
}

/// Returns whether the file passed.
pub fn run_validate_file(args: &FileArgs, standards_dir: Option<&Path>) -> Result<bool> {
    let validator = load_validator(standards_dir)?;
    let report = validator
        .validate(&args.file_type, &DataSource::File(args.path.clone()))
        .with_context(|| format!("validate {}", args.path.display()))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize report")?
        );
    } else {
        for line in file_report_lines(&report) {
            println!("{line}");
        }
    }
    info!(
        columns = report.results.len(),
        exceptions = report.exception_count(),
        pass = report.pass,
        "file validation complete"
    );
    Ok(report.pass)
}

pub fn run_sample(args: &SampleArgs, standards_dir: Option<&Path>) -> Result<()> {
    let (store, _) = load_standards(standards_dir)?;
    let values = sample_column(
        &store,
        &args.file_type,
        &args.header,
        args.size,
        args.str_width,
    )
    .with_context(|| format!("sample {} {}", args.file_type, args.header))?;
    println!(
        "{}",
        serde_json::to_string(&values).context("serialize samples")?
    );
    Ok(())
}

pub fn run_query(args: &QueryArgs, standards_dir: Option<&Path>) -> Result<()> {
    let (store, _) = load_standards(standards_dir)?;
    let query = build_query(args);
    let columns = query.run(&store);
    debug!(matches = columns.len(), "column query complete");

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&columns).context("serialize columns")?
        );
    } else if columns.is_empty() {
        println!("No matching columns.");
    } else {
        println!("{}", query_table(&columns));
    }
    Ok(())
}

pub fn build_query(args: &QueryArgs) -> ColumnQuery {
    let nonnull = match (args.nonnull, args.nullable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    ColumnQuery::new()
        .with_entity_types(args.file_types.clone())
        .with_headers(args.headers.clone())
        .with_descriptions(args.descriptions.clone())
        .with_required(args.required.clone())
        .with_nonnull(nonnull)
        .with_defaults(args.defaults.iter().map(|d| Value::parse(d)).collect())
        .with_data_types(args.data_types.clone())
        .with_sql_types(args.sql_types.clone())
}

pub fn run_standards(standards_dir: Option<&Path>) -> Result<()> {
    let (store, summary) = load_standards(standards_dir)?;
    println!("Standards: {}", summary.standards_dir.display());
    println!("OED version: {}", summary.manifest_pins.oed);
    println!("Files: {}", summary.file_count);
    println!("Columns: {}", store.len());
    println!("{}", standards_table(&summary));
    Ok(())
}
