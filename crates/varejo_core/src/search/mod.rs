//! Search matching helpers.
//!
//! # Responsibility
//! - Provide the text normalization used by name-search predicates.
//!
//! # Invariants
//! - Matching is insensitive to both case and Latin diacritics.

pub mod text;
