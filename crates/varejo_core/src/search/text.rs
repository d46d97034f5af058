//! Case- and diacritic-insensitive substring matching.
//!
//! # Responsibility
//! - Fold text so `"bingo"` finds `"Bingo Heeler"` and `"jose"` finds
//!   `"José"`.
//!
//! # Invariants
//! - Folding lowercases first, then strips Latin diacritics to base
//!   letters; characters outside the table pass through unchanged.

/// Folds text for matching: lowercase plus Latin diacritic stripping.
pub fn fold_for_match(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect()
}

/// Returns whether `haystack` contains `needle` after folding both sides.
///
/// An empty needle matches everything, mirroring substring semantics.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_for_match(haystack).contains(&fold_for_match(needle))
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::{contains_folded, fold_for_match};

    #[test]
    fn folding_lowercases_and_strips_diacritics() {
        assert_eq!(fold_for_match("São João"), "sao joao");
        assert_eq!(fold_for_match("AÇÚCAR"), "acucar");
    }

    #[test]
    fn substring_match_ignores_case_and_accents_on_both_sides() {
        assert!(contains_folded("Bingo Heeler", "BINGO"));
        assert!(contains_folded("José da Silva", "jose"));
        assert!(contains_folded("acai na tigela", "Açaí"));
        assert!(!contains_folded("Bingo Heeler", "bluey"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(contains_folded("anything", ""));
    }
}
