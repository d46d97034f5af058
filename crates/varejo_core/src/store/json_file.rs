//! JSON flat-file implementation of the collection store.
//!
//! # Responsibility
//! - Persist one collection as a pretty-printed JSON array of records.
//! - Replace the artifact atomically so readers never see partial writes.
//!
//! # Invariants
//! - The temporary file is created in the artifact's own directory, so the
//!   final rename stays on one filesystem.
//! - A failed save leaves the previous artifact byte-for-byte intact.

use super::{CollectionStore, StoreError, StoreResult};
use crate::entity::EntityKind;
use crate::model::record::Record;
use log::{error, info};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-backed store holding one collection per JSON artifact.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over an explicit artifact path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the conventional store for one resource kind under a data
    /// directory (`<data_dir>/<key>.json`).
    pub fn for_entity(data_dir: impl AsRef<Path>, entity: EntityKind) -> Self {
        Self::new(data_dir.as_ref().join(format!("{}.json", entity.key())))
    }

    /// Returns the artifact path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        error!(
            "event=collection_save module=store status=error path={} error={}",
            self.path.display(),
            source
        );
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Record>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                error!(
                    "event=collection_load module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(self.read_error(err));
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| {
            error!(
                "event=collection_load module=store status=corrupt path={} error={}",
                self.path.display(),
                err
            );
            StoreError::Parse {
                path: self.path.clone(),
                source: err,
            }
        })
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|err| self.write_error(err))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|err| self.write_error(err))?;
        serde_json::to_writer_pretty(&mut tmp, records)
            .map_err(|err| self.write_error(err.into()))?;
        tmp.flush().map_err(|err| self.write_error(err))?;
        tmp.persist(&self.path)
            .map_err(|err| self.write_error(err.error))?;

        info!(
            "event=collection_save module=store status=ok path={} records={}",
            self.path.display(),
            records.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CollectionStore, JsonFileStore};
    use crate::entity::EntityKind;

    #[test]
    fn entity_store_uses_key_as_file_stem() {
        let store = JsonFileStore::for_entity("/srv/varejo/data", EntityKind::Campaigns);
        assert!(store.path().ends_with("campaigns.json"));
    }

    #[test]
    fn absent_artifact_loads_as_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::for_entity(dir.path(), EntityKind::Users);
        assert!(store.load().unwrap().is_empty());
    }
}
