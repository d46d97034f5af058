//! Durable collection storage.
//!
//! # Responsibility
//! - Define the persistence seam every repository writes through.
//! - Keep artifact format and filesystem details out of repository logic.
//!
//! # Invariants
//! - An absent artifact is an empty collection, never an error.
//! - Read failures are distinguishable from write failures, and corrupt
//!   content is distinguishable from an unreadable file.

use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;

pub use json_file::JsonFileStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for one collection artifact.
#[derive(Debug)]
pub enum StoreError {
    /// The artifact exists but cannot be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact was read but its content is not a valid collection.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The new collection state could not be persisted. The previous
    /// artifact is left in place untouched.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read collection `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "corrupt collection `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "cannot write collection `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Persistence contract for one record collection.
///
/// The unit of exchange is the whole collection: repositories load full
/// current state, apply one change and save full new state, whatever the
/// backing technology.
pub trait CollectionStore {
    /// Loads the full collection. Absent storage yields an empty one.
    fn load(&self) -> StoreResult<Vec<Record>>;

    /// Replaces the durable collection with the given records.
    ///
    /// The replacement must be all-or-nothing: a concurrent reader sees
    /// either the previous artifact or the new one, never a partial write.
    fn save(&self, records: &[Record]) -> StoreResult<()>;
}
