//! Column schema records loaded from the standards data.

use serde::Serialize;

use crate::enums::{DataType, EntityType, RequiredFlag};
use crate::range::ValueRange;
use crate::value::Value;

/// Named sampling method plus the extra arguments passed after the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SamplingSpec {
    pub method: String,
    pub args: Vec<String>,
}

/// Static metadata for one column of one OED file type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSchema {
    pub entity: EntityType,
    pub field_name: String,
    pub description: String,
    pub required: RequiredFlag,
    pub nullable: bool,
    pub data_type: Option<DataType>,
    pub sql_type: Option<String>,
    pub default: Option<Value>,
    /// Natural range of the SQL type.
    pub dtype_range: Option<ValueRange>,
    /// Narrower set of permitted values specific to this column.
    pub column_range: Option<ValueRange>,
    /// Registry key of a predicate replacing plain range membership.
    pub validation: Option<String>,
    pub sampling: Option<SamplingSpec>,
}

impl ColumnSchema {
    pub fn new(entity: EntityType, field_name: impl Into<String>) -> Self {
        Self {
            entity,
            field_name: field_name.into(),
            description: String::new(),
            required: RequiredFlag::Optional,
            nullable: true,
            data_type: None,
            sql_type: None,
            default: None,
            dtype_range: None,
            column_range: None,
            validation: None,
            sampling: None,
        }
    }

    /// Lowercased field name, the second half of the store key.
    pub fn key(&self) -> String {
        self.field_name.to_ascii_lowercase()
    }

    /// Column range when declared, otherwise the natural dtype range.
    pub fn effective_range(&self) -> Option<&ValueRange> {
        self.column_range.as_ref().or(self.dtype_range.as_ref())
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: RequiredFlag) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    #[must_use]
    pub fn with_sql_type(mut self, sql_type: impl Into<String>) -> Self {
        self.sql_type = Some(sql_type.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_dtype_range(mut self, range: ValueRange) -> Self {
        self.dtype_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_column_range(mut self, range: ValueRange) -> Self {
        self.column_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_validation(mut self, method: impl Into<String>) -> Self {
        self.validation = Some(method.into());
        self
    }

    #[must_use]
    pub fn with_sampling(mut self, method: impl Into<String>, args: Vec<String>) -> Self {
        self.sampling = Some(SamplingSpec {
            method: method.into(),
            args,
        });
        self
    }
}
