//! Generic record repository.
//!
//! # Responsibility
//! - Serve as the sole gateway to one collection's durable storage.
//! - Apply the uniform create/get/list/find/update/delete semantics with
//!   per-resource configuration supplied by [`EntityKind`].
//!
//! # Invariants
//! - A record's `id` never changes, whatever an update supplies.
//! - Mutations hold the collection's write lock across the whole
//!   load-modify-save cycle; readers share the read lock.
//! - A failed save leaves the previously persisted collection as it was.

use crate::entity::EntityKind;
use crate::model::date::canonicalize_order_date;
use crate::model::record::{FieldMap, Record, RecordValidationError};
use crate::store::{CollectionStore, StoreError};
use log::{debug, info};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record operations.
#[derive(Debug)]
pub enum RepoError {
    /// Required fields absent or blank. Recoverable by the caller.
    Validation(RecordValidationError),
    /// No record with the requested id. Recoverable by the caller.
    NotFound { entity: EntityKind, id: String },
    /// Durable storage failed; the collection state is unchanged.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => {
                write!(f, "{} not found: {id}", entity.singular())
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One resource kind's record repository.
///
/// Each instance exclusively owns one collection and its durable artifact;
/// the six kinds never share an instance or a lock. State lives in storage,
/// not in memory: every operation materializes the collection fresh, so
/// repositories stay consistent across processes sharing a data directory
/// as long as saves are atomic.
pub struct RecordRepository<S: CollectionStore> {
    entity: EntityKind,
    store: RwLock<S>,
}

impl<S: CollectionStore> RecordRepository<S> {
    /// Creates the repository for one resource kind over its store.
    pub fn new(entity: EntityKind, store: S) -> Self {
        Self {
            entity,
            store: RwLock::new(store),
        }
    }

    /// Returns the resource kind this repository serves.
    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    /// Returns the full collection, freshly loaded.
    pub fn list(&self) -> RepoResult<Vec<Record>> {
        Ok(self.read_store().load()?)
    }

    /// Returns the record whose `id` matches exactly.
    ///
    /// # Errors
    /// - [`RepoError::NotFound`] when no record carries the id.
    pub fn get(&self, id: &str) -> RepoResult<Record> {
        self.list()?
            .into_iter()
            .find(|record| record.id() == Some(id))
            .ok_or_else(|| self.not_found(id))
    }

    /// Returns the records satisfying the predicate.
    ///
    /// An empty result is a successful empty collection, never an error;
    /// boundary layers own any empty-result policy.
    pub fn find<P>(&self, predicate: P) -> RepoResult<Vec<Record>>
    where
        P: Fn(&Record) -> bool,
    {
        Ok(self
            .list()?
            .into_iter()
            .filter(|record| predicate(record))
            .collect())
    }

    /// Creates a record from caller-supplied fields.
    ///
    /// Validates the resource's required fields, generates a fresh random
    /// id, canonicalizes the configured date field, appends and persists.
    ///
    /// # Errors
    /// - [`RepoError::Validation`] naming every missing field.
    /// - [`RepoError::Store`] when loading or persisting fails.
    pub fn create(&self, fields: FieldMap) -> RepoResult<Record> {
        let mut record = Record::with_new_id(fields);
        if let Err(err) = record.validate_required(self.entity.required_fields()) {
            debug!(
                "event=record_create module=repo entity={} status=rejected reason={}",
                self.entity.key(),
                err
            );
            return Err(err.into());
        }

        if let Some(field) = self.entity.date_field() {
            canonicalize_field(&mut record, field);
        }

        let store = self.write_store();
        let mut records = store.load()?;
        records.push(record.clone());
        store.save(&records)?;

        info!(
            "event=record_create module=repo entity={} id={} status=ok",
            self.entity.key(),
            record.id().unwrap_or_default()
        );
        Ok(record)
    }

    /// Merges partial fields over the record with the given id.
    ///
    /// Caller-supplied fields overwrite, everything else is retained and
    /// the stored id is re-asserted. An empty field set is a no-op: the
    /// record is returned and the artifact is not rewritten.
    ///
    /// # Errors
    /// - [`RepoError::NotFound`] when no record carries the id.
    /// - [`RepoError::Store`] when loading or persisting fails.
    pub fn update(&self, id: &str, partial: FieldMap) -> RepoResult<Record> {
        let store = self.write_store();
        let mut records = store.load()?;
        let index = position_of(&records, id).ok_or_else(|| self.not_found(id))?;

        if partial.is_empty() {
            return Ok(records[index].clone());
        }

        let date_supplied = self
            .entity
            .date_field()
            .is_some_and(|field| partial.contains_key(field));

        let record = &mut records[index];
        record.merge(partial);
        record.set_id(id);
        if date_supplied {
            if let Some(field) = self.entity.date_field() {
                canonicalize_field(record, field);
            }
        }

        let updated = records[index].clone();
        store.save(&records)?;

        info!(
            "event=record_update module=repo entity={} id={} status=ok",
            self.entity.key(),
            id
        );
        Ok(updated)
    }

    /// Removes and returns the record with the given id.
    ///
    /// # Errors
    /// - [`RepoError::NotFound`] when no record carries the id.
    /// - [`RepoError::Store`] when loading or persisting fails.
    pub fn delete(&self, id: &str) -> RepoResult<Record> {
        let store = self.write_store();
        let mut records = store.load()?;
        let index = position_of(&records, id).ok_or_else(|| self.not_found(id))?;

        let removed = records.remove(index);
        store.save(&records)?;

        info!(
            "event=record_delete module=repo entity={} id={} status=ok",
            self.entity.key(),
            id
        );
        Ok(removed)
    }

    fn not_found(&self, id: &str) -> RepoError {
        debug!(
            "event=record_lookup module=repo entity={} id={} status=not_found",
            self.entity.key(),
            id
        );
        RepoError::NotFound {
            entity: self.entity,
            id: id.to_string(),
        }
    }

    // Lock poisoning is recovered rather than propagated: a panicked holder
    // never leaves a partial artifact because saves replace it atomically.
    fn read_store(&self) -> RwLockReadGuard<'_, S> {
        match self.store.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, S> {
        match self.store.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn position_of(records: &[Record], id: &str) -> Option<usize> {
    records.iter().position(|record| record.id() == Some(id))
}

fn canonicalize_field(record: &mut Record, field: &str) {
    let raw = record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned);
    record.insert(
        field,
        Value::String(canonicalize_order_date(raw.as_deref())),
    );
}
