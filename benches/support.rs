//! Shared helpers for benchmarks

use pantry::catalog::CatalogEntry;

const WORDS: &[&str] = &[
    "apple", "apricot", "banana", "bread", "butter", "cheese", "coffee", "cream", "eggs", "flour",
    "garlic", "honey", "jam", "kale", "lemon", "milk", "oats", "pasta", "rice", "salt", "sugar",
    "tea", "tomato", "yogurt",
];

/// A catalog of `size` two-word item names
#[allow(dead_code)]
pub fn make_catalog(size: usize) -> Vec<CatalogEntry> {
    (0..size)
        .map(|i| {
            let first = WORDS[i % WORDS.len()];
            let second = WORDS[(i / WORDS.len()) % WORDS.len()];
            CatalogEntry::new(i.to_string(), format!("{} {} {}", first, second, i))
        })
        .collect()
}
