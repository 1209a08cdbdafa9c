//! List-mode search: every catalog entry containing the typed query,
//! grouped the way a list page shows them.

use std::cmp::Ordering;

use crate::catalog::CatalogEntry;
use crate::omnibox::matcher::{compare_names, normalize_name};
use crate::omnibox::ActivePredicate;

/// Most recently activated first, then alphabetical (case/accent-insensitive).
/// Never-activated entries sort last.
pub fn sort_by_activation_then_name(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    b.activated_at
        .unwrap_or(0)
        .cmp(&a.activated_at.unwrap_or(0))
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Search results for one query, grouped for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults<'a> {
    /// Normalized query
    pub query: String,
    /// All matches: inactive first, then recency, then name
    pub sorted: Vec<&'a CatalogEntry>,
    /// Inactive here, but on the other list
    pub visible_addable: Vec<&'a CatalogEntry>,
    /// On neither list
    pub hidden: Vec<&'a CatalogEntry>,
    /// Already active here
    pub active: Vec<&'a CatalogEntry>,
}

impl<'a> SearchResults<'a> {
    pub fn new(catalog: &'a [CatalogEntry], query: &str, is_active: &ActivePredicate) -> Self {
        let query = normalize_name(query);
        if query.is_empty() {
            return Self::default();
        }

        let mut sorted: Vec<&CatalogEntry> = catalog
            .iter()
            .filter(|entry| normalize_name(&entry.name).contains(&query))
            .collect();
        sorted.sort_by(|a, b| {
            is_active
                .matches(a)
                .cmp(&is_active.matches(b))
                .then_with(|| sort_by_activation_then_name(a, b))
        });

        let (active, addable): (Vec<&CatalogEntry>, Vec<&CatalogEntry>) =
            sorted.iter().copied().partition(|entry| is_active.matches(entry));
        let (hidden, visible_addable): (Vec<&CatalogEntry>, Vec<&CatalogEntry>) =
            addable.into_iter().partition(|entry| entry.is_hidden());

        Self {
            query,
            sorted,
            visible_addable,
            hidden,
            active,
        }
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// Entries active under `is_active`, most recent first
pub fn active_entries<'a>(
    catalog: &'a [CatalogEntry],
    is_active: &ActivePredicate,
) -> Vec<&'a CatalogEntry> {
    let mut entries: Vec<&CatalogEntry> = catalog.iter().filter(|e| is_active.matches(e)).collect();
    entries.sort_by(|a, b| sort_by_activation_then_name(a, b));
    entries
}
