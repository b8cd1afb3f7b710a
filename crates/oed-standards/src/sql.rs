//! SQL column types used in the OED definitions and their natural ranges.

use oed_model::{DataType, ValueRange};

/// Declared type and natural range derived from a SQL column type.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlTypeInfo {
    pub data_type: DataType,
    pub range: Option<ValueRange>,
}

const STRING_TYPES: &[&str] = &[
    "char",
    "nchar",
    "varchar",
    "nvarchar",
    "text",
    "ntext",
    "date",
    "datetime",
    "datetime2",
    "smalldatetime",
    "time",
];

/// Strip any length/precision suffix and normalise spacing and case,
/// so `NVARCHAR(40)` becomes `nvarchar` and `unsigned  int` becomes `unsigned int`.
pub fn normalize_sql_type(sql_type: &str) -> String {
    let base = sql_type.split('(').next().unwrap_or_default();
    base.split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look up a SQL column type. Returns `None` for unsupported types.
pub fn sql_type_info(sql_type: &str) -> Option<SqlTypeInfo> {
    let normalized = normalize_sql_type(sql_type);
    let half_open = |start: i128, stop: i128| SqlTypeInfo {
        data_type: DataType::Integer,
        range: Some(ValueRange::HalfOpen { start, stop }),
    };
    let interval = |low: f64, high: f64| SqlTypeInfo {
        data_type: DataType::Real,
        range: Some(ValueRange::Interval { low, high }),
    };
    let info = match normalized.as_str() {
        "bit" | "unsigned bit" => half_open(0, 2),
        "tinyint" => half_open(-(1 << 7), (1 << 7) + 1),
        "unsigned tinyint" => half_open(0, 1 << 8),
        "smallint" => half_open(-(1 << 15), (1 << 15) - 1),
        "unsigned smallint" => half_open(0, 1 << 16),
        "int" => half_open(-(1 << 31), (1 << 31) - 1),
        "unsigned int" => half_open(0, 1 << 32),
        "bigint" => half_open(-(1 << 63), (1 << 63) - 1),
        "unsigned bigint" => half_open(0, 1 << 64),
        "float" => interval(-1.79e308, 1.79e308),
        "real" => interval(-3.40e38, 3.40e38),
        "decimal" | "numeric" => interval(-1e39 + 1.0, 1e39 - 1.0),
        other if STRING_TYPES.contains(&other) => SqlTypeInfo {
            data_type: DataType::String,
            range: None,
        },
        _ => return None,
    };
    Some(info)
}
