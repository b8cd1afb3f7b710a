//! Cell values and the numeric coercion applied before validation.

use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;

/// A single cell value, either raw text from a file or an already typed literal.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Int(i128),
    /// Integer literal too wide for `i128`, kept as canonical decimal text.
    BigInt(String),
    Float(f64),
    Complex {
        re: f64,
        im: f64,
    },
    Str(String),
}

impl Value {
    /// Parse raw cell text into the narrowest numeric value it denotes.
    ///
    /// Text is tried as an integer, then a float, then a complex literal.
    /// Anything else is kept as a string.
    pub fn parse(raw: &str) -> Value {
        parse_numeric(raw).unwrap_or_else(|| Value::Str(raw.to_string()))
    }

    /// Apply [`Value::parse`] to string values, passing every other value through.
    pub fn coerce(self) -> Value {
        match self {
            Value::Str(text) => match parse_numeric(&text) {
                Some(value) => value,
                None => Value::Str(text),
            },
            other => other,
        }
    }

    /// Integers as floats, for real-typed columns.
    pub fn into_real(self) -> Value {
        match self {
            Value::Int(v) => Value::Float(v as f64),
            Value::BigInt(digits) => match digits.parse::<f64>() {
                Ok(v) => Value::Float(v),
                Err(_) => Value::BigInt(digits),
            },
            other => other,
        }
    }

    /// Null or the empty string.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Str(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Short type name used in data type error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) | Value::BigInt(_) => "int",
            Value::Float(_) => "float",
            Value::Complex { .. } => "complex",
            Value::Str(_) => "str",
        }
    }

    /// Numeric view of integer and float values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }
}

fn parse_numeric(raw: &str) -> Option<Value> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<i128>() {
        Ok(value) => return Some(Value::Int(value)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Some(Value::BigInt(canonical_digits(text)));
        }
        Err(_) => {}
    }
    if let Ok(value) = text.parse::<f64>() {
        return Some(Value::Float(value));
    }
    parse_complex(text).map(|(re, im)| Value::Complex { re, im })
}

/// Sign and decimal digits of an overflowing integer literal, without a
/// leading `+` or leading zeros.
fn canonical_digits(text: &str) -> String {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = digits.trim_start_matches('0');
    if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    }
}

/// Accepts `a+bj`, `a-bj`, `bj` and the parenthesised forms, with `j` or `J`.
fn parse_complex(text: &str) -> Option<(f64, f64)> {
    let inner = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(text);
    let body = inner.strip_suffix(['j', 'J'])?;
    let bytes = body.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));
    match split {
        Some(i) => {
            let re = body[..i].parse::<f64>().ok()?;
            let im = parse_imaginary(&body[i..])?;
            Some((re, im))
        }
        None => Some((0.0, parse_imaginary(body)?)),
    }
}

fn parse_imaginary(text: &str) -> Option<f64> {
    match text {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        _ => text.parse::<f64>().ok(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(v) => write!(f, "{v}"),
            Value::BigInt(digits) => f.write_str(digits),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Complex { re, im } if im.is_sign_negative() => {
                write!(f, "({re:?}-{:?}j)", -im)
            }
            Value::Complex { re, im } => write!(f, "({re:?}+{im:?}j)"),
            Value::Str(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Value::Null, Value::Str)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(i128::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
