//! Repository layer over durable collection storage.
//!
//! # Responsibility
//! - Define the uniform record operations every resource kind is served by.
//! - Serialize mutations per collection so no write is lost.
//!
//! # Invariants
//! - Every mutation is a full-collection read-modify-write.
//! - Repositories return semantic errors (`NotFound`, `Validation`) in
//!   addition to storage transport errors.

pub mod record_repo;
