//! Column search over the master schema.

use oed_model::{ColumnSchema, DataType, EntityType, RequiredFlag, Value};

use crate::store::SchemaStore;

/// Combinable column filters.
///
/// Every non-empty filter must match (filters are AND-ed); within one filter
/// any listed alternative may match. Text filters are case-insensitive
/// substring matches. A query with no filters matches nothing.
#[derive(Debug, Clone, Default)]
pub struct ColumnQuery {
    pub entity_types: Vec<EntityType>,
    pub headers: Vec<String>,
    pub descriptions: Vec<String>,
    pub required: Vec<RequiredFlag>,
    /// `Some(true)` selects non-null columns, `Some(false)` nullable ones.
    pub nonnull: Option<bool>,
    pub defaults: Vec<Value>,
    pub data_types: Vec<DataType>,
    pub sql_types: Vec<String>,
}

impl ColumnQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entity_types(mut self, entity_types: Vec<EntityType>) -> Self {
        self.entity_types = entity_types;
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_descriptions(mut self, descriptions: Vec<String>) -> Self {
        self.descriptions = descriptions;
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: Vec<RequiredFlag>) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_nonnull(mut self, nonnull: Option<bool>) -> Self {
        self.nonnull = nonnull;
        self
    }

    #[must_use]
    pub fn with_defaults(mut self, defaults: Vec<Value>) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub fn with_data_types(mut self, data_types: Vec<DataType>) -> Self {
        self.data_types = data_types;
        self
    }

    #[must_use]
    pub fn with_sql_types(mut self, sql_types: Vec<String>) -> Self {
        self.sql_types = sql_types;
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.entity_types.is_empty()
            && self.headers.is_empty()
            && self.descriptions.is_empty()
            && self.required.is_empty()
            && self.nonnull.is_none()
            && self.defaults.is_empty()
            && self.data_types.is_empty()
            && self.sql_types.is_empty()
    }

    pub fn matches(&self, column: &ColumnSchema) -> bool {
        (self.entity_types.is_empty() || self.entity_types.contains(&column.entity))
            && contains_any(&column.field_name, &self.headers)
            && contains_any(&column.description, &self.descriptions)
            && (self.required.is_empty() || self.required.contains(&column.required))
            && self.nonnull.is_none_or(|nonnull| column.nullable != nonnull)
            && (self.defaults.is_empty()
                || column
                    .default
                    .as_ref()
                    .is_some_and(|default| self.defaults.iter().any(|d| same_value(d, default))))
            && (self.data_types.is_empty()
                || column
                    .data_type
                    .is_some_and(|data_type| self.data_types.contains(&data_type)))
            && (self.sql_types.is_empty()
                || column
                    .sql_type
                    .as_deref()
                    .is_some_and(|sql_type| contains_any(sql_type, &self.sql_types)))
    }

    /// Matching columns sorted by field name, then file type.
    pub fn run<'a>(&self, store: &'a SchemaStore) -> Vec<&'a ColumnSchema> {
        if self.is_unfiltered() {
            return Vec::new();
        }
        let mut results: Vec<&ColumnSchema> = store.iter().filter(|c| self.matches(c)).collect();
        results.sort_by(|a, b| {
            a.field_name
                .cmp(&b.field_name)
                .then_with(|| a.entity.cmp(&b.entity))
        });
        results
    }
}

fn contains_any(text: &str, needles: &[String]) -> bool {
    if needles.is_empty() {
        return true;
    }
    let text = text.to_lowercase();
    needles
        .iter()
        .any(|needle| text.contains(&needle.to_lowercase()))
}

/// Numeric defaults compare by value, so `0` matches `0.0`.
fn same_value(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}
