//! Core domain logic for the Varejo back office.
//! This crate is the single source of truth for record semantics and storage.

pub mod entity;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod store;

pub use entity::{EmptySearch, EntityKind, MatchMode, SearchConfig};
pub use logging::{default_log_level, init_logging};
pub use model::date::canonicalize_order_date;
pub use model::record::{FieldMap, Record, RecordValidationError, ID_FIELD};
pub use repo::record_repo::{RecordRepository, RepoError, RepoResult};
pub use search::text::{contains_folded, fold_for_match};
pub use store::{CollectionStore, JsonFileStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
