//! Suggestion ranking against the live catalog.
//!
//! Candidates are every entry whose name *contains* the query. Ranking puts
//! prefix matches first, then shorter names, then base-collation order
//! (case and accents ignored). Only the head of the ranking is ever used for
//! inline completion, and only when it is prefix-compatible with what was typed;
//! the full ranking is exposed for list consumers.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::CatalogEntry;
use crate::util::{char_len, starts_with_ignore_case};

/// Comparison key used for matching: trimmed and lower-cased
pub fn normalize_name(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Collation key with case and diacritics folded ("Crème" -> "creme")
pub fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Case- and accent-insensitive alphabetical order.
///
/// Names that collate equal fall back to plain code point order so the
/// result is total and reproducible.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// All entries containing `raw_input`, best first
pub fn rank_suggestions<'a>(catalog: &'a [CatalogEntry], raw_input: &str) -> Vec<&'a CatalogEntry> {
    let needle = normalize_name(raw_input);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(&CatalogEntry, bool, usize)> = catalog
        .iter()
        .filter_map(|entry| {
            let name = entry.name.to_lowercase();
            if !name.contains(&needle) {
                return None;
            }
            Some((entry, name.starts_with(&needle), char_len(&entry.name)))
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then(a.2.cmp(&b.2))
            .then_with(|| compare_names(&a.0.name, &b.0.name))
    });

    candidates.into_iter().map(|(entry, _, _)| entry).collect()
}

/// The single best-ranked entry containing `raw_input`
pub fn best_suggestion<'a>(catalog: &'a [CatalogEntry], raw_input: &str) -> Option<&'a CatalogEntry> {
    rank_suggestions(catalog, raw_input).into_iter().next()
}

/// Whether `name` can be shown as an inline completion of `typed`:
/// it must extend `typed` case-insensitively and be strictly longer.
pub fn completes(name: &str, typed: &str) -> bool {
    char_len(name) > char_len(typed) && starts_with_ignore_case(name, typed)
}
