//! A list page: one catalog viewed through one activation flag.
//!
//! The shopping page treats "on the shopping list" as active, the stock page
//! treats "in stock" as active. The page is the omnibox's catalog
//! collaborator and keeps the state surrounding list UI needs (current
//! search query, which entry to highlight).

use crate::catalog::{ActivationFlag, Catalog, CatalogEntry, ItemId};
use crate::omnibox::{ActivePredicate, CatalogHost};
use crate::search::{active_entries, SearchResults};

#[derive(Debug)]
pub struct ListPage<'a> {
    catalog: &'a mut Catalog,
    pub flag: ActivationFlag,
    /// Trimmed query last reported by the omnibox
    pub query: String,
    /// Entry the user should be pointed at (already active when submitted)
    pub highlighted: Option<ItemId>,
    /// Set whenever the catalog was mutated through this page
    pub dirty: bool,
}

impl<'a> ListPage<'a> {
    pub fn new(catalog: &'a mut Catalog, flag: ActivationFlag) -> Self {
        Self {
            catalog,
            flag,
            query: String::new(),
            highlighted: None,
            dirty: false,
        }
    }

    pub fn is_active(&self) -> ActivePredicate {
        self.flag.predicate()
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Entries active on this page, most recently activated first
    pub fn active_items(&self) -> Vec<&CatalogEntry> {
        active_entries(self.catalog.entries(), &self.is_active())
    }

    /// Matches for the current query
    pub fn search(&self) -> SearchResults<'_> {
        SearchResults::new(self.catalog.entries(), &self.query, &self.is_active())
    }
}

impl CatalogHost for ListPage<'_> {
    fn entries(&self) -> &[CatalogEntry] {
        self.catalog.entries()
    }

    fn activate_item(&mut self, entry: &CatalogEntry) {
        match self.catalog.activate(&entry.id, self.flag) {
            Ok(()) => self.dirty = true,
            Err(e) => tracing::warn!("Could not activate '{}': {}", entry.name, e),
        }
    }

    fn create_item(&mut self, name: &str) -> Option<CatalogEntry> {
        match self.catalog.add_item(name) {
            Ok(entry) => {
                self.dirty = true;
                Some(entry)
            }
            Err(e) => {
                tracing::warn!("Could not create '{}': {}", name, e);
                None
            }
        }
    }

    fn on_existing_active(&mut self, entry: &CatalogEntry) {
        tracing::debug!("'{}' is already on the {}", entry.name, self.flag.label());
        self.highlighted = Some(entry.id.clone());
    }

    fn on_query_change(&mut self, query: &str) {
        self.query = query.to_string();
    }
}
