//! Order-date canonicalization.
//!
//! # Responsibility
//! - Normalize the order `date` field to `dd/mm/yyyy` at write time.
//!
//! # Invariants
//! - Already-canonical input passes through unchanged.
//! - `yyyy-mm-dd`, optionally followed by a space- or `T`-separated time
//!   component, is reordered without calendar validation.
//! - Absent or unrecognized input becomes the current local date.

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

static CANONICAL_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("valid canonical date regex"));
static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})([ T].*)?$").expect("valid iso date regex")
});

/// Canonicalizes an order date to the `dd/mm/yyyy` display format.
///
/// # Contract
/// - `Some("15/08/2023")` → `"15/08/2023"`.
/// - `Some("2023-08-15")` and `Some("2023-08-15 16:00:00")` → `"15/08/2023"`.
/// - `None`, blank or unrecognized input → today's local date.
pub fn canonicalize_order_date(raw: Option<&str>) -> String {
    let Some(text) = raw.map(str::trim).filter(|text| !text.is_empty()) else {
        return today();
    };

    if CANONICAL_DATE_RE.is_match(text) {
        return text.to_string();
    }

    if let Some(caps) = ISO_DATE_RE.captures(text) {
        return format!("{}/{}/{}", &caps[3], &caps[2], &caps[1]);
    }

    today()
}

/// Returns whether a string is already in the canonical `dd/mm/yyyy` shape.
pub fn is_canonical_date(text: &str) -> bool {
    CANONICAL_DATE_RE.is_match(text)
}

fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}
