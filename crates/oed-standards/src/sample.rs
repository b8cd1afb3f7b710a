//! Synthetic column values consistent with the column schema.

use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::debug;

use oed_model::{ColumnSchema, DataType, RangeMember, Value, ValueRange};

use crate::error::SampleError;
use crate::store::SchemaStore;

pub const DEFAULT_SAMPLE_SIZE: usize = 10;
pub const DEFAULT_STRING_WIDTH: usize = 20;

/// Real samples stay inside this magnitude so the sampling span stays finite.
const REAL_SAMPLE_LIMIT: f64 = 1.79e307;

/// Sample `size` values for a column using the thread-local generator.
///
/// See [`sample_column_with_rng`].
pub fn sample_column(
    store: &SchemaStore,
    schema_type: &str,
    header: &str,
    size: usize,
    string_width: Option<usize>,
) -> Result<Option<Vec<Value>>, SampleError> {
    sample_column_with_rng(
        store,
        schema_type,
        header,
        size,
        string_width,
        &mut rand::thread_rng(),
    )
}

/// Sample `size` values for a column.
///
/// A `size` of zero means [`DEFAULT_SAMPLE_SIZE`]. Returns `None` when the
/// column has no declared type. Columns with both a column range and a
/// sampling method delegate to the method; otherwise integers and strings are
/// drawn from the column range (or the natural dtype range), reals uniformly
/// between the range bounds, and unconstrained strings are random
/// alphanumeric text of `string_width` characters.
pub fn sample_column_with_rng(
    store: &SchemaStore,
    schema_type: &str,
    header: &str,
    size: usize,
    string_width: Option<usize>,
    rng: &mut dyn RngCore,
) -> Result<Option<Vec<Value>>, SampleError> {
    let column = store.lookup(schema_type, header)?;
    let Some(data_type) = column.data_type else {
        return Ok(None);
    };
    let size = if size == 0 { DEFAULT_SAMPLE_SIZE } else { size };
    debug!(schema_type, header, size, %data_type, "sampling column");

    if let (Some(range), Some(spec)) = (&column.column_range, &column.sampling) {
        let method = store
            .sampling_method(column)
            .ok_or_else(|| SampleError::UnknownMethod(spec.method.clone()))?;
        let values = (0..size)
            .map(|_| method(range, &spec.args, &mut *rng))
            .collect();
        return Ok(Some(values));
    }

    let values = match data_type {
        DataType::Integer => (0..size)
            .map(|_| Value::Int(sample_int(column.effective_range(), &mut *rng)))
            .collect(),
        DataType::Real => {
            let (low, high) = real_bounds(column);
            (0..size)
                .map(|_| Value::Float(rng.gen_range(low..=high)))
                .collect()
        }
        DataType::String => match &column.column_range {
            Some(ValueRange::Discrete(members)) => {
                let members: Vec<&RangeMember> = members.iter().collect();
                (0..size)
                    .filter_map(|_| members.choose(&mut *rng).copied().map(member_value))
                    .collect()
            }
            _ => {
                let width = string_width.unwrap_or(DEFAULT_STRING_WIDTH);
                (0..size)
                    .map(|_| Value::Str(random_alphanumeric(width, &mut *rng)))
                    .collect()
            }
        },
    };
    Ok(Some(values))
}

fn sample_int(range: Option<&ValueRange>, rng: &mut dyn RngCore) -> i128 {
    let unbounded = i128::from(i64::MIN)..=i128::from(i64::MAX);
    let Some(range) = range else {
        return rng.gen_range(unbounded);
    };
    match range {
        ValueRange::HalfOpen { start, stop } => rng.gen_range(*start..*stop),
        ValueRange::Discrete(_) => match range.int_members().choose(&mut *rng) {
            Some(code) => *code,
            None => rng.gen_range(unbounded),
        },
        ValueRange::Interval { low, high } => {
            let (low, high) = (low.ceil() as i128, high.floor() as i128);
            if low >= high {
                low
            } else {
                rng.gen_range(low..=high)
            }
        }
    }
}

fn real_bounds(column: &ColumnSchema) -> (f64, f64) {
    let (low, high) = column
        .effective_range()
        .and_then(ValueRange::numeric_bounds)
        .unwrap_or((f64::MIN, f64::MAX));
    (low.max(-REAL_SAMPLE_LIMIT), high.min(REAL_SAMPLE_LIMIT))
}

fn member_value(member: &RangeMember) -> Value {
    match member {
        RangeMember::Int(code) => Value::Int(*code),
        RangeMember::Str(token) => Value::Str(token.clone()),
    }
}

fn random_alphanumeric(width: usize, rng: &mut dyn RngCore) -> String {
    (0..width)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
