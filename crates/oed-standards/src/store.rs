//! Immutable in-memory OED column schema store.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use oed_model::{
    ColumnSchema, DataType, EntityType, MASTER_SCHEMA, RangeMember, ValidationError, ValueRange,
};

use crate::error::StandardsError;
use crate::methods::{MethodRegistry, SamplingFn, ValidationFn};

/// Column schemas keyed by file type and lowercased field name.
///
/// Built once and shared read-only, typically behind an [`Arc`]. Every
/// validation and sampling method named by a column is resolved against the
/// store's method registry at construction.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    version: Option<String>,
    entities: BTreeMap<EntityType, BTreeMap<String, ColumnSchema>>,
    /// Lowercased field names across every file type.
    known_fields: BTreeSet<String>,
    methods: Arc<MethodRegistry>,
}

impl SchemaStore {
    pub fn new(
        columns: Vec<ColumnSchema>,
        methods: Arc<MethodRegistry>,
    ) -> Result<Self, StandardsError> {
        let mut entities: BTreeMap<EntityType, BTreeMap<String, ColumnSchema>> = BTreeMap::new();
        let mut known_fields = BTreeSet::new();
        for column in columns {
            check_methods(&column, &methods)?;
            check_range(&column)?;
            let key = column.key();
            known_fields.insert(key.clone());
            let schema = entities.entry(column.entity).or_default();
            if schema.contains_key(&key) {
                return Err(StandardsError::DuplicateColumn {
                    entity: column.entity,
                    field_name: column.field_name,
                });
            }
            schema.insert(key, column);
        }
        Ok(Self {
            version: None,
            entities,
            known_fields,
            methods,
        })
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Pinned OED schema version, when loaded from a standards directory.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn methods(&self) -> &MethodRegistry {
        &self.methods
    }

    /// Resolve the schema of `header` in the `schema_type` file type.
    ///
    /// Both names match case-insensitively. Failures distinguish an unknown
    /// file type from an unknown column, and a column unknown everywhere
    /// from one that only belongs to other file types. The master schema is
    /// never a valid target.
    pub fn lookup(&self, schema_type: &str, header: &str) -> Result<&ColumnSchema, ValidationError> {
        if schema_type.trim().eq_ignore_ascii_case(MASTER_SCHEMA) {
            return Err(ValidationError::master_lookup());
        }
        let entity = schema_type.parse::<EntityType>().ok();
        let known_anywhere = self.is_known_column(header);
        match entity {
            None if !known_anywhere => Err(ValidationError::schema_and_column(schema_type, header)),
            None => Err(ValidationError::schema(schema_type)),
            Some(_) if !known_anywhere => Err(ValidationError::column(header)),
            Some(entity) => self
                .column(entity, header)
                .ok_or_else(|| ValidationError::schema_column(schema_type, header)),
        }
    }

    pub fn column(&self, entity: EntityType, header: &str) -> Option<&ColumnSchema> {
        self.entities
            .get(&entity)
            .and_then(|schema| schema.get(&header.to_ascii_lowercase()))
    }

    /// Whether `header` is a column of any file type.
    pub fn is_known_column(&self, header: &str) -> bool {
        self.known_fields.contains(&header.to_ascii_lowercase())
    }

    /// Columns of one file type, ordered by lowercased field name.
    pub fn columns(&self, entity: EntityType) -> impl Iterator<Item = &ColumnSchema> {
        self.entities
            .get(&entity)
            .into_iter()
            .flat_map(BTreeMap::values)
    }

    /// Every column of every file type (the master schema).
    pub fn iter(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.entities.values().flat_map(BTreeMap::values)
    }

    /// Field names of the required columns of a file type.
    pub fn required_columns(&self, entity: EntityType) -> Vec<&str> {
        self.columns(entity)
            .filter(|c| c.required.is_required())
            .map(|c| c.field_name.as_str())
            .collect()
    }

    pub fn entity_types(&self) -> impl Iterator<Item = EntityType> + '_ {
        self.entities.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validation_method(&self, column: &ColumnSchema) -> Option<ValidationFn> {
        column
            .validation
            .as_deref()
            .and_then(|name| self.methods.validation(name))
    }

    pub fn sampling_method(&self, column: &ColumnSchema) -> Option<SamplingFn> {
        column
            .sampling
            .as_ref()
            .and_then(|spec| self.methods.sampling(&spec.method))
    }
}

fn check_methods(column: &ColumnSchema, methods: &MethodRegistry) -> Result<(), StandardsError> {
    let unknown = |kind: &'static str, method: &str| StandardsError::UnknownMethod {
        entity: column.entity,
        field_name: column.field_name.clone(),
        kind,
        method: method.to_string(),
    };
    if let Some(name) = &column.validation
        && methods.validation(name).is_none()
    {
        return Err(unknown("validation", name));
    }
    if let Some(spec) = &column.sampling
        && methods.sampling(&spec.method).is_none()
    {
        return Err(unknown("sampling", &spec.method));
    }
    Ok(())
}

fn check_range(column: &ColumnSchema) -> Result<(), StandardsError> {
    let Some(range) = &column.column_range else {
        return Ok(());
    };
    let invalid = |message: &str| StandardsError::InvalidRange {
        entity: column.entity,
        field_name: column.field_name.clone(),
        message: message.to_string(),
    };
    if range.is_empty() {
        return Err(invalid("range is empty"));
    }
    let has_strings = matches!(range, ValueRange::Discrete(members)
        if members.iter().any(|m| matches!(m, RangeMember::Str(_))));
    match (column.data_type, range) {
        (Some(DataType::Integer), ValueRange::Interval { .. }) => {
            Err(invalid("integer columns cannot use a real interval"))
        }
        (Some(DataType::Integer | DataType::Real), _) if has_strings => {
            Err(invalid("numeric columns cannot list string tokens"))
        }
        (Some(DataType::String), ValueRange::Interval { .. } | ValueRange::HalfOpen { .. }) => {
            Err(invalid("string columns need an enumerated range"))
        }
        _ => Ok(()),
    }
}
