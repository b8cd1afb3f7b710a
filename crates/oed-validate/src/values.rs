//! Per-value validation of one column.

use tracing::{debug, trace};

use oed_model::{ColumnSchema, DataType, RowError, ValidationError, Value};
use oed_standards::{SchemaStore, ValidationFn};

use crate::error::{ProcessError, Result};
use crate::result::{HEADER_ROW, ValueResult};

/// Validate the values of `header` in a `schema_type` file.
///
/// Values are in file order; the value at index `i` is reported at row
/// `i + 2`. A failed schema lookup yields a single failing result at the
/// header row instead of per-value results.
pub fn validate_column<'a>(
    store: &'a SchemaStore,
    schema_type: &str,
    header: &str,
    values: Vec<Value>,
    column_pos: Option<usize>,
) -> Result<ValueResults<'a>> {
    let column = match store.lookup(schema_type, header) {
        Ok(column) => column,
        Err(error) => {
            debug!(schema_type, header, code = error.code(), "column lookup failed");
            return Ok(ValueResults::lookup_failure(header, column_pos, error));
        }
    };
    let Some(data_type) = column.data_type else {
        return Err(ProcessError::UnsupportedDataType {
            entity: column.entity,
            header: column.field_name.clone(),
        });
    };

    debug!(schema_type, header, values = values.len(), "validating column values");
    Ok(ValueResults {
        header: header.to_string(),
        column_pos,
        state: State::Values(ColumnCheck {
            column,
            data_type,
            validation: store.validation_method(column),
            values: values.into_iter().enumerate(),
        }),
    })
}

/// Lazy per-value verdicts for one column.
#[derive(Debug)]
pub struct ValueResults<'a> {
    header: String,
    column_pos: Option<usize>,
    state: State<'a>,
}

#[derive(Debug)]
enum State<'a> {
    LookupFailed(Option<RowError>),
    Values(ColumnCheck<'a>),
}

#[derive(Debug)]
struct ColumnCheck<'a> {
    column: &'a ColumnSchema,
    data_type: DataType,
    validation: Option<ValidationFn>,
    values: std::iter::Enumerate<std::vec::IntoIter<Value>>,
}

impl ValueResults<'_> {
    fn lookup_failure(header: &str, column_pos: Option<usize>, error: ValidationError) -> Self {
        Self {
            header: header.to_string(),
            column_pos,
            state: State::LookupFailed(Some(RowError::new(HEADER_ROW, error))),
        }
    }
}

impl Iterator for ValueResults<'_> {
    type Item = ValueResult;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::LookupFailed(error) => {
                let error = error.take()?;
                Some(ValueResult {
                    header: self.header.clone(),
                    value: Value::Null,
                    row: HEADER_ROW,
                    column_pos: self.column_pos,
                    exceptions: vec![error],
                    pass: false,
                })
            }
            State::Values(check) => {
                let (index, raw) = check.values.next()?;
                let row = index + 2;
                let value = check.coerce(raw);
                let exceptions: Vec<RowError> = check
                    .check(&self.header, &value)
                    .map(|error| RowError::new(row, error))
                    .into_iter()
                    .collect();
                if let Some(failure) = exceptions.first() {
                    trace!(
                        header = %self.header,
                        row,
                        code = failure.error.code(),
                        "value failed validation"
                    );
                }
                Some(ValueResult {
                    header: self.header.clone(),
                    value,
                    row,
                    column_pos: self.column_pos,
                    pass: exceptions.is_empty(),
                    exceptions,
                })
            }
        }
    }
}

impl ColumnCheck<'_> {
    /// Coerce numeric-looking text; integers in real columns become floats.
    fn coerce(&self, raw: Value) -> Value {
        match self.data_type {
            DataType::Real => raw.coerce().into_real(),
            _ => raw.coerce(),
        }
    }

    /// At most one error per value, in priority order null, type, range.
    fn check(&self, header: &str, value: &Value) -> Option<ValidationError> {
        if value.is_null() {
            return (!self.column.nullable).then(|| ValidationError::null_value(header));
        }

        let type_ok = match self.data_type {
            DataType::Integer => matches!(value, Value::Int(_) | Value::BigInt(_)),
            DataType::Real => matches!(value, Value::Int(_) | Value::Float(_)),
            DataType::String => matches!(value, Value::Str(_) | Value::Int(_) | Value::BigInt(_)),
        };
        if !type_ok {
            return Some(ValidationError::invalid_data_type(
                &value.to_string(),
                header,
                self.data_type.as_str(),
                value.type_name(),
            ));
        }

        let range = self.column.effective_range();
        let in_range = match self.validation {
            Some(validate) => validate(range, value),
            None => range.is_none_or(|range| range.contains(value)),
        };
        (!in_range).then(|| ValidationError::out_of_range(&value.to_string(), header))
    }
}
