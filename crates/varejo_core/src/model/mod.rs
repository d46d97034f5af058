//! Domain model shared by every resource repository.
//!
//! # Responsibility
//! - Define the schema-less record shape used by all six collections.
//! - Own write-time field normalization (order dates).
//!
//! # Invariants
//! - Every record is identified by a non-empty string `id`.
//! - `id` never changes after creation, whatever an update supplies.

pub mod date;
pub mod record;
