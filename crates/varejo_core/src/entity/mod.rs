//! Per-resource configuration for the six record collections.
//!
//! # Responsibility
//! - Name every resource kind and its storage key.
//! - Declare required fields, search behavior and date normalization
//!   per resource as data, not per-resource code.
//!
//! # Invariants
//! - Storage keys are unique; two kinds never share a durable artifact.
//! - Search configuration exists only for resources that expose a search
//!   endpoint.

use serde::{Deserialize, Serialize};

/// The six independent resource kinds served by this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Users,
    Products,
    Stores,
    Orders,
    Suppliers,
    Campaigns,
}

/// How a search endpoint compares the designated field against the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case- and diacritic-insensitive substring match.
    Substring,
    /// Exact string equality on the stored value.
    Exact,
}

/// Boundary-layer policy for a search that matches nothing.
///
/// The original per-resource contracts disagree on this, and both answers
/// are kept as fixed, tested behavior rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptySearch {
    /// Answer with an empty collection.
    EmptyList,
    /// Answer with a not-found error.
    NotFound,
}

/// Search endpoint configuration for one resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Field the search term is compared against.
    pub field: &'static str,
    pub mode: MatchMode,
    pub on_empty: EmptySearch,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Users,
        EntityKind::Products,
        EntityKind::Stores,
        EntityKind::Orders,
        EntityKind::Suppliers,
        EntityKind::Campaigns,
    ];

    /// Storage key, also the durable artifact's file stem.
    pub fn key(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Products => "products",
            Self::Stores => "stores",
            Self::Orders => "orders",
            Self::Suppliers => "suppliers",
            Self::Campaigns => "campaigns",
        }
    }

    /// Singular noun used in error and log messages.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Users => "user",
            Self::Products => "product",
            Self::Stores => "store",
            Self::Orders => "order",
            Self::Suppliers => "supplier",
            Self::Campaigns => "campaign",
        }
    }

    /// Fields that must be present and non-blank when creating a record.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Users => &["name", "contact_email", "user", "pwd", "level", "status"],
            Self::Products => &[
                "name",
                "description",
                "price",
                "stock_quantity",
                "supplier_id",
                "status",
            ],
            Self::Stores => &[
                "store_name",
                "cnpj",
                "address",
                "phone_number",
                "contact_email",
                "status",
            ],
            Self::Orders => &["store_id", "items", "total_amount", "status", "date"],
            Self::Suppliers => &[
                "supplier_name",
                "supplier_category",
                "contact_email",
                "phone_number",
                "status",
            ],
            Self::Campaigns => &[
                "supplier_id",
                "name",
                "start_date",
                "end_date",
                "discount_percentage",
            ],
        }
    }

    /// Search endpoint configuration, when the resource exposes one.
    pub fn search(self) -> Option<SearchConfig> {
        match self {
            Self::Users | Self::Products => None,
            Self::Stores => Some(SearchConfig {
                field: "store_name",
                mode: MatchMode::Substring,
                on_empty: EmptySearch::NotFound,
            }),
            Self::Orders => Some(SearchConfig {
                field: "date",
                mode: MatchMode::Exact,
                on_empty: EmptySearch::NotFound,
            }),
            Self::Suppliers => Some(SearchConfig {
                field: "supplier_name",
                mode: MatchMode::Substring,
                on_empty: EmptySearch::EmptyList,
            }),
            Self::Campaigns => Some(SearchConfig {
                field: "name",
                mode: MatchMode::Substring,
                on_empty: EmptySearch::EmptyList,
            }),
        }
    }

    /// Field canonicalized to `dd/mm/yyyy` on create/update, when any.
    pub fn date_field(self) -> Option<&'static str> {
        match self {
            Self::Orders => Some("date"),
            _ => None,
        }
    }
}
