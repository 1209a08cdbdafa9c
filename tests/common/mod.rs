//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use pantry::catalog::{ActivationFlag, CatalogEntry};
use pantry::omnibox::{CatalogHost, OmniboxDriver, VirtualField};

/// Catalog collaborator that records every callback
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub items: Vec<CatalogEntry>,
    pub flag: Option<ActivationFlag>,
    pub activated: Vec<String>,
    pub created: Vec<String>,
    pub highlighted: Vec<String>,
    pub queries: Vec<String>,
    next_id: usize,
    clock: u64,
}

impl RecordingHost {
    pub fn new(items: Vec<CatalogEntry>, flag: ActivationFlag) -> Self {
        let next_id = items.len() + 1;
        Self {
            items,
            flag: Some(flag),
            next_id,
            ..Self::default()
        }
    }

    pub fn item(&self, name: &str) -> &CatalogEntry {
        self.items
            .iter()
            .find(|item| item.name == name)
            .unwrap_or_else(|| panic!("no item named {}", name))
    }

    /// Nothing but the one callback a test expects was called
    pub fn callbacks(&self) -> usize {
        self.activated.len() + self.created.len() + self.highlighted.len()
    }
}

impl CatalogHost for RecordingHost {
    fn entries(&self) -> &[CatalogEntry] {
        &self.items
    }

    fn activate_item(&mut self, entry: &CatalogEntry) {
        self.activated.push(entry.name.clone());
        self.clock += 1;
        let flag = self.flag.unwrap_or(ActivationFlag::OnShoppingList);
        let clock = self.clock;
        if let Some(item) = self.items.iter_mut().find(|item| item.id == entry.id) {
            match flag {
                ActivationFlag::InStock => item.in_stock = true,
                ActivationFlag::OnShoppingList => item.on_shopping_list = true,
            }
            item.activated_at = Some(clock);
        }
    }

    fn create_item(&mut self, name: &str) -> Option<CatalogEntry> {
        self.created.push(name.to_string());
        let entry = CatalogEntry::new(self.next_id.to_string(), name);
        self.next_id += 1;
        self.items.push(entry.clone());
        Some(entry)
    }

    fn on_existing_active(&mut self, entry: &CatalogEntry) {
        self.highlighted.push(entry.name.clone());
    }

    fn on_query_change(&mut self, query: &str) {
        self.queries.push(query.to_string());
    }
}

/// Apple, Apricot, Arugula (all inactive) and Banana (on the shopping list)
pub fn fruit() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("1", "Apple"),
        CatalogEntry::new("2", "Apricot"),
        CatalogEntry::new("3", "Arugula"),
        CatalogEntry::new("4", "Banana").with_flag(ActivationFlag::OnShoppingList),
    ]
}

/// Entries with the given names and no flags
pub fn items(names: &[&str]) -> Vec<CatalogEntry> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| CatalogEntry::new((i + 1).to_string(), *name))
        .collect()
}

/// A shopping-list omnibox over a recording host
pub fn harness(items: Vec<CatalogEntry>) -> (OmniboxDriver<VirtualField>, RecordingHost) {
    let flag = ActivationFlag::OnShoppingList;
    (
        OmniboxDriver::new(flag.predicate(), VirtualField::new()),
        RecordingHost::new(items, flag),
    )
}
