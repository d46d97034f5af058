//! Schema-less record model.
//!
//! # Responsibility
//! - Represent one entity instance as an ordered field-name → value mapping.
//! - Provide merge semantics for partial updates.
//! - Validate required-field presence without imposing a fixed schema.
//!
//! # Invariants
//! - The `id` field is a freshly generated UUID v4 string; caller-supplied
//!   ids are discarded at creation time.
//! - Field insertion order is preserved through serialization round-trips.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Ordered mapping from field name to JSON value.
pub type FieldMap = serde_json::Map<String, Value>;

/// Name of the identity field present in every record.
pub const ID_FIELD: &str = "id";

/// Validation error for required-field presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// One or more required fields are absent or blank. Field names are
    /// reported in the order the resource configuration declares them.
    MissingFields(Vec<String>),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(names) => {
                write!(f, "missing required fields: {}", names.join(", "))
            }
        }
    }
}

impl Error for RecordValidationError {}

/// One entity instance as an ordered field map.
///
/// Records are deliberately schema-less: resources differ only in which
/// fields are required and which field search endpoints look at. The value
/// side is plain JSON, so nested structures (order line items) need no
/// special casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: FieldMap,
}

impl Record {
    /// Wraps already-identified fields, e.g. rows loaded from storage.
    pub fn from_fields(fields: FieldMap) -> Self {
        Self { fields }
    }

    /// Builds a new record from caller-supplied fields with a fresh id.
    ///
    /// # Invariants
    /// - The generated id is placed first in field order.
    /// - Any `id` supplied by the caller is dropped, never trusted.
    pub fn with_new_id(fields: FieldMap) -> Self {
        let mut ordered = FieldMap::new();
        ordered.insert(
            ID_FIELD.to_string(),
            Value::String(Uuid::new_v4().to_string()),
        );
        for (name, value) in fields {
            if name != ID_FIELD {
                ordered.insert(name, value);
            }
        }
        Self { fields: ordered }
    }

    /// Returns the record id, when present and a string.
    pub fn id(&self) -> Option<&str> {
        self.fields.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Overwrites the id field in place.
    pub fn set_id(&mut self, id: &str) {
        self.fields
            .insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    }

    /// Returns one field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Inserts or replaces one field value.
    pub fn insert(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    /// Merges caller-supplied fields over this record.
    ///
    /// Supplied fields overwrite, all other existing fields are retained.
    /// The caller is responsible for re-asserting the id afterwards.
    pub fn merge(&mut self, partial: FieldMap) {
        for (name, value) in partial {
            self.fields.insert(name, value);
        }
    }

    /// Checks that every required field is present and non-blank.
    ///
    /// # Errors
    /// - [`RecordValidationError::MissingFields`] naming every offender.
    pub fn validate_required(&self, required: &[&str]) -> Result<(), RecordValidationError> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| is_blank(self.fields.get(**name)))
            .map(|name| (*name).to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RecordValidationError::MissingFields(missing))
        }
    }

    /// Borrows the underlying field map.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Consumes the record into its field map.
    pub fn into_fields(self) -> FieldMap {
        self.fields
    }
}

/// Returns whether a value counts as absent for required-field checks.
///
/// Absent, `null`, blank strings and empty arrays are missing. Numbers
/// (including `0`), booleans and objects count as present.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}
