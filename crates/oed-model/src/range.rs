//! Permitted value ranges for columns.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::value::Value;

/// Member of a discrete range: an integer code or a string token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum RangeMember {
    Int(i128),
    Str(String),
}

impl fmt::Display for RangeMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeMember::Int(v) => write!(f, "{v}"),
            RangeMember::Str(v) => f.write_str(v),
        }
    }
}

/// Set of values a column accepts.
///
/// Integer dtype ranges are half-open (`start..stop`), real dtype ranges and
/// real column ranges are closed intervals, and enumerated column ranges
/// are discrete sets of integer codes and string tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueRange {
    Discrete(BTreeSet<RangeMember>),
    Interval { low: f64, high: f64 },
    HalfOpen { start: i128, stop: i128 },
}

impl ValueRange {
    pub fn discrete<I>(members: I) -> Self
    where
        I: IntoIterator<Item = RangeMember>,
    {
        ValueRange::Discrete(members.into_iter().collect())
    }

    /// Whether `value` lies in this range.
    ///
    /// Reals are compared against the bounds of a discrete integer set, and
    /// must be integral to fall inside a half-open integer range. Strings only
    /// match string members. Integers wider than `i128` are outside every range.
    pub fn contains(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueRange::Discrete(members), Value::Int(v)) => {
                members.contains(&RangeMember::Int(*v))
            }
            (ValueRange::Discrete(_), Value::Float(v)) => match self.numeric_bounds() {
                Some((low, high)) => low <= *v && *v <= high,
                None => false,
            },
            (ValueRange::Discrete(members), Value::Str(v)) => members
                .iter()
                .any(|m| matches!(m, RangeMember::Str(s) if s == v)),
            (ValueRange::Interval { low, high }, Value::Int(_) | Value::Float(_)) => {
                value.as_f64().is_some_and(|v| *low <= v && v <= *high)
            }
            (ValueRange::HalfOpen { start, stop }, Value::Int(v)) => start <= v && v < stop,
            (ValueRange::HalfOpen { start, stop }, Value::Float(v)) => {
                v.fract() == 0.0 && *v >= *start as f64 && *v < *stop as f64
            }
            _ => false,
        }
    }

    /// Smallest and largest numeric value of the range.
    ///
    /// For a half-open range the upper bound is `stop - 1`. Discrete ranges
    /// without integer members have no numeric bounds.
    pub fn numeric_bounds(&self) -> Option<(f64, f64)> {
        match self {
            ValueRange::Discrete(members) => {
                let mut ints = members.iter().filter_map(|m| match m {
                    RangeMember::Int(v) => Some(*v),
                    RangeMember::Str(_) => None,
                });
                let first = ints.next()?;
                let (low, high) = ints.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
                Some((low as f64, high as f64))
            }
            ValueRange::Interval { low, high } => Some((*low, *high)),
            ValueRange::HalfOpen { start, stop } => Some((*start as f64, (*stop - 1) as f64)),
        }
    }

    /// Integer members of a discrete range, in ascending order.
    pub fn int_members(&self) -> Vec<i128> {
        match self {
            ValueRange::Discrete(members) => members
                .iter()
                .filter_map(|m| match m {
                    RangeMember::Int(v) => Some(*v),
                    RangeMember::Str(_) => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// String members of a discrete range, in ascending order.
    pub fn str_members(&self) -> Vec<&str> {
        match self {
            ValueRange::Discrete(members) => members
                .iter()
                .filter_map(|m| match m {
                    RangeMember::Str(v) => Some(v.as_str()),
                    RangeMember::Int(_) => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ValueRange::Discrete(members) => members.is_empty(),
            ValueRange::Interval { low, high } => low > high,
            ValueRange::HalfOpen { start, stop } => start >= stop,
        }
    }
}
