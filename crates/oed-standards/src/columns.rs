#![deny(unsafe_code)]

//! Loader for the pre-built OED column schema CSV.

use std::collections::BTreeSet;
use std::path::Path;

use oed_model::{ColumnSchema, DataType, EntityType, RangeMember, RequiredFlag, Value, ValueRange};

use crate::error::StandardsError;
use crate::sql::sql_type_info;

/// Upper bound on the number of codes an `a:b` range token may expand to.
const MAX_EXPANDED_CODES: i128 = 100_000;

const REQUIRED_HEADERS: &[&str] = &["Entity", "Field Name", "Required", "Blank", "SQL Type"];

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim_matches('\u{feff}') == name)
}

fn get_string(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Parse a `;`-separated column range.
///
/// `a:b` integer pairs expand to every code from `a` to `b` inclusive, a
/// decimal pair `x:y` is a closed real interval (bounds in either order) and
/// must be the only token, bare integers are integer codes and anything else
/// is a string token. Blank text means no range.
pub fn parse_column_range(text: &str) -> Result<Option<ValueRange>, String> {
    let tokens: Vec<&str> = text
        .split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut members = BTreeSet::new();
    let mut interval = None;
    for token in tokens {
        if let Some((lo, hi)) = token.split_once(':') {
            let (lo, hi) = (lo.trim(), hi.trim());
            if let (Ok(lo), Ok(hi)) = (lo.parse::<i128>(), hi.parse::<i128>()) {
                if lo > hi {
                    return Err(format!("empty code range \"{token}\""));
                }
                if hi - lo >= MAX_EXPANDED_CODES {
                    return Err(format!("code range \"{token}\" is too large to enumerate"));
                }
                members.extend((lo..=hi).map(RangeMember::Int));
                continue;
            }
            if let (Ok(a), Ok(b)) = (lo.parse::<f64>(), hi.parse::<f64>()) {
                let (low, high) = (a.min(b), a.max(b));
                if interval.is_some() {
                    return Err("only one real interval is allowed".to_string());
                }
                interval = Some(ValueRange::Interval { low, high });
                continue;
            }
        }
        match token.parse::<i128>() {
            Ok(code) => members.insert(RangeMember::Int(code)),
            Err(_) => members.insert(RangeMember::Str(token.to_string())),
        };
    }

    match interval {
        Some(_) if !members.is_empty() => {
            Err("a real interval cannot be combined with other range tokens".to_string())
        }
        Some(interval) => Ok(Some(interval)),
        None => Ok(Some(ValueRange::Discrete(members))),
    }
}

fn parse_blank(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Some(true),
        "no" | "n" | "false" => Some(false),
        _ => None,
    }
}

pub fn parse_columns_csv(path: &Path) -> Result<Vec<ColumnSchema>, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    for name in REQUIRED_HEADERS {
        if header_index(&headers, name).is_none() {
            return Err(StandardsError::Csv {
                path: path.to_path_buf(),
                message: format!("missing header \"{name}\""),
            });
        }
    }

    let idx_entity = header_index(&headers, "Entity");
    let idx_field = header_index(&headers, "Field Name");
    let idx_desc = header_index(&headers, "Description");
    let idx_required = header_index(&headers, "Required");
    let idx_blank = header_index(&headers, "Blank");
    let idx_sql = header_index(&headers, "SQL Type");
    let idx_default = header_index(&headers, "Default");
    let idx_range = header_index(&headers, "Column Range");
    let idx_validation = header_index(&headers, "Validation");
    let idx_sampling = header_index(&headers, "Sampling");
    let idx_sampling_args = header_index(&headers, "Sampling Args");

    let mut results = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| StandardsError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let line = row.position().map_or(0, csv::Position::line);
        let invalid = |message: String| StandardsError::InvalidColumn {
            path: path.to_path_buf(),
            line,
            message,
        };

        let entity: EntityType = get_string(&row, idx_entity)
            .unwrap_or_default()
            .parse()
            .map_err(invalid)?;
        let Some(field_name) = get_string(&row, idx_field) else {
            return Err(invalid("missing field name".to_string()));
        };
        let required: RequiredFlag = get_string(&row, idx_required)
            .unwrap_or_default()
            .parse()
            .map_err(invalid)?;
        let blank = get_string(&row, idx_blank).unwrap_or_default();
        let nullable = parse_blank(&blank)
            .ok_or_else(|| invalid(format!("invalid Blank value \"{blank}\"")))?;

        let mut column = ColumnSchema::new(entity, field_name)
            .with_description(get_string(&row, idx_desc).unwrap_or_default())
            .with_required(required)
            .with_nullable(nullable);

        if let Some(sql_type) = get_string(&row, idx_sql) {
            let info = sql_type_info(&sql_type)
                .ok_or_else(|| invalid(format!("unsupported SQL type \"{sql_type}\"")))?;
            column.data_type = Some(info.data_type);
            column.dtype_range = info.range;
            column.sql_type = Some(sql_type);
        }

        if let Some(default) = get_string(&row, idx_default) {
            column.default = Some(match (column.data_type, Value::parse(&default)) {
                (Some(DataType::Real), value) => value.into_real(),
                (Some(DataType::String), _) => Value::Str(default),
                (_, value) => value,
            });
        }

        if let Some(text) = get_string(&row, idx_range) {
            column.column_range = parse_column_range(&text).map_err(invalid)?;
        }

        column.validation = get_string(&row, idx_validation);
        if let Some(method) = get_string(&row, idx_sampling) {
            let args = get_string(&row, idx_sampling_args)
                .map(|args| {
                    args.split('|')
                        .map(str::trim)
                        .filter(|a| !a.is_empty())
                        .map(ToString::to_string)
                        .collect()
                })
                .unwrap_or_default();
            column = column.with_sampling(method, args);
        }

        results.push(column);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_code_pairs() {
        let range = parse_column_range("0:3;7").unwrap().unwrap();
        assert_eq!(range.int_members(), vec![0, 1, 2, 3, 7]);
    }

    #[test]
    fn real_pair_is_an_interval() {
        let range = parse_column_range("-90.0:90.0").unwrap().unwrap();
        assert_eq!(
            range,
            ValueRange::Interval {
                low: -90.0,
                high: 90.0
            }
        );
        assert!(parse_column_range("0.0:1.0;5").is_err());
    }

    #[test]
    fn text_tokens_are_strings() {
        let range = parse_column_range("QS; SS ;CXL;;").unwrap().unwrap();
        assert_eq!(range.str_members(), vec!["CXL", "QS", "SS"]);
        assert_eq!(parse_column_range("  ").unwrap(), None);
    }

    #[test]
    fn reversed_real_pairs_are_normalized() {
        assert_eq!(
            parse_column_range("1.0:0.5").unwrap(),
            Some(ValueRange::Interval {
                low: 0.5,
                high: 1.0
            })
        );
        assert!(parse_column_range("5:1").is_err());
    }
}
