//! Household item catalog
//!
//! The catalog is the collection every omnibox searches and creates against.
//! Items are never deleted: an item with neither flag set is "hidden" and can
//! be brought back by typing its exact name.
//!
//! Persisted as JSON (`~/.config/pantry/catalog.json` by default).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::SystemTime;

use crate::omnibox::ActivePredicate;

/// Schema version written to disk
const CATALOG_VERSION: u32 = 1;

/// Opaque item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Which list an item can be active on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivationFlag {
    /// Item is in the pantry
    InStock,
    /// Item is on the shopping list
    OnShoppingList,
}

impl ActivationFlag {
    /// Predicate selecting entries with this flag set
    pub fn predicate(self) -> ActivePredicate {
        ActivePredicate::new(move |entry| entry.is_set(self))
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivationFlag::InStock => "stock",
            ActivationFlag::OnShoppingList => "shopping list",
        }
    }
}

/// A single nameable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub on_shopping_list: bool,
    /// Unix epoch millis of the last activation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<u64>,
}

impl CatalogEntry {
    /// Create an entry with no flags set
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            in_stock: false,
            on_shopping_list: false,
            activated_at: None,
        }
    }

    /// Builder: set a flag
    pub fn with_flag(mut self, flag: ActivationFlag) -> Self {
        self.set_flag(flag, true);
        self
    }

    pub fn is_set(&self, flag: ActivationFlag) -> bool {
        match flag {
            ActivationFlag::InStock => self.in_stock,
            ActivationFlag::OnShoppingList => self.on_shopping_list,
        }
    }

    fn set_flag(&mut self, flag: ActivationFlag, value: bool) {
        match flag {
            ActivationFlag::InStock => self.in_stock = value,
            ActivationFlag::OnShoppingList => self.on_shopping_list = value,
        }
    }

    /// Neither in stock nor on the shopping list
    pub fn is_hidden(&self) -> bool {
        !self.in_stock && !self.on_shopping_list
    }
}

/// Errors from catalog mutation and persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Reading or writing the catalog file failed
    Io(String),
    /// The catalog file is not valid JSON for this schema
    Parse(String),
    /// A name was empty after trimming
    EmptyName,
    /// No item with this id
    UnknownItem(ItemId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "IO error: {}", e),
            CatalogError::Parse(e) => write!(f, "Parse error: {}", e),
            CatalogError::EmptyName => write!(f, "Item name cannot be empty"),
            CatalogError::UnknownItem(id) => write!(f, "Unknown item: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {}

/// On-disk representation
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    items: Vec<CatalogEntry>,
}

/// In-memory item store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(items: Vec<CatalogEntry>) -> Self {
        Self { items }
    }

    /// A small starter catalog covering every flag combination
    pub fn demo() -> Self {
        Self::from_entries(vec![
            CatalogEntry::new("demo-1", "Milk").with_flag(ActivationFlag::OnShoppingList),
            CatalogEntry::new("demo-2", "Eggs").with_flag(ActivationFlag::InStock),
            CatalogEntry::new("demo-3", "Bread").with_flag(ActivationFlag::OnShoppingList),
            CatalogEntry::new("demo-4", "Coffee")
                .with_flag(ActivationFlag::InStock)
                .with_flag(ActivationFlag::OnShoppingList),
            CatalogEntry::new("demo-5", "Ice Cream"),
        ])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&CatalogEntry> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn get_mut(&mut self, id: &ItemId) -> Result<&mut CatalogEntry, CatalogError> {
        self.items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| CatalogError::UnknownItem(id.clone()))
    }

    /// Case-insensitive exact lookup on the trimmed name
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        let wanted = name.trim().to_lowercase();
        self.items
            .iter()
            .find(|item| item.name.trim().to_lowercase() == wanted)
    }

    /// Add an item, or return the existing one with the same name.
    ///
    /// Never creates a duplicate; the returned entry has no flags set when new.
    pub fn add_item(&mut self, name: &str) -> Result<CatalogEntry, CatalogError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyName);
        }

        if let Some(existing) = self.find_by_name(trimmed) {
            tracing::debug!("add_item: '{}' already exists as {}", trimmed, existing.id);
            return Ok(existing.clone());
        }

        let entry = CatalogEntry::new(ItemId::generate(), trimmed);
        tracing::info!("Created item '{}' ({})", entry.name, entry.id);
        self.items.push(entry.clone());
        Ok(entry)
    }

    /// Set a flag and stamp the activation time
    pub fn activate(&mut self, id: &ItemId, flag: ActivationFlag) -> Result<(), CatalogError> {
        let item = self.get_mut(id)?;
        item.set_flag(flag, true);
        item.activated_at = Some(now_epoch_millis());
        tracing::info!("Activated '{}' on {}", item.name, flag.label());
        Ok(())
    }

    /// Flip a flag, returning its new value
    pub fn toggle(&mut self, id: &ItemId, flag: ActivationFlag) -> Result<bool, CatalogError> {
        let item = self.get_mut(id)?;
        let next = !item.is_set(flag);
        item.set_flag(flag, next);
        tracing::info!("Toggled '{}' {} -> {}", item.name, flag.label(), next);
        Ok(next)
    }

    /// Take an item off the shopping list after buying it.
    ///
    /// Stock status is left alone: a permanent stock item stays in stock,
    /// anything else becomes hidden.
    pub fn mark_bought(&mut self, id: &ItemId) -> Result<(), CatalogError> {
        let item = self.get_mut(id)?;
        item.on_shopping_list = false;
        tracing::info!("Bought '{}'", item.name);
        Ok(())
    }

    pub fn rename(&mut self, id: &ItemId, new_name: &str) -> Result<(), CatalogError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        let item = self.get_mut(id)?;
        tracing::info!("Renamed '{}' -> '{}'", item.name, trimmed);
        item.name = trimmed.to_string();
        Ok(())
    }

    /// Load a catalog file. A missing file is an empty catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            tracing::debug!("Catalog not found at {}, starting empty", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        let file: CatalogFile = serde_json::from_str(&content)
            .map_err(|e| CatalogError::Parse(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            "Loaded {} items from {} (schema v{})",
            file.items.len(),
            path.display(),
            file.version
        );
        Ok(Self::from_entries(file.items))
    }

    /// Write the catalog, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CatalogError::Io(format!("{}: {}", parent.display(), e)))?;
        }

        let file = CatalogFile {
            version: CATALOG_VERSION,
            items: self.items.clone(),
        };
        let content =
            serde_json::to_string_pretty(&file).map_err(|e| CatalogError::Parse(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Saved {} items to {}", self.items.len(), path.display());
        Ok(())
    }
}

fn now_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_trims_name() {
        let mut catalog = Catalog::new();
        let entry = catalog.add_item("  Apple ").unwrap();
        assert_eq!(entry.name, "Apple");
        assert!(entry.is_hidden());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_item_rejects_empty() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.add_item("   "), Err(CatalogError::EmptyName));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_item_returns_existing_case_insensitively() {
        let mut catalog = Catalog::demo();
        let before = catalog.len();
        let entry = catalog.add_item("milk").unwrap();
        assert_eq!(entry.id, ItemId::from("demo-1"));
        assert_eq!(entry.name, "Milk");
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn test_activate_sets_flag_and_timestamp() {
        let mut catalog = Catalog::demo();
        let id = ItemId::from("demo-5");
        catalog.activate(&id, ActivationFlag::InStock).unwrap();
        let item = catalog.get(&id).unwrap();
        assert!(item.in_stock);
        assert!(!item.on_shopping_list);
        assert!(item.activated_at.is_some());
    }

    #[test]
    fn test_activate_unknown_item() {
        let mut catalog = Catalog::new();
        let err = catalog
            .activate(&ItemId::from("nope"), ActivationFlag::InStock)
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownItem(ItemId::from("nope")));
    }

    #[test]
    fn test_toggle_flips_flag() {
        let mut catalog = Catalog::demo();
        let id = ItemId::from("demo-2");
        assert!(!catalog.toggle(&id, ActivationFlag::InStock).unwrap());
        assert!(catalog.toggle(&id, ActivationFlag::InStock).unwrap());
    }

    #[test]
    fn test_mark_bought_keeps_stock() {
        let mut catalog = Catalog::demo();

        // Coffee is both in stock and listed
        let coffee = ItemId::from("demo-4");
        catalog.mark_bought(&coffee).unwrap();
        let item = catalog.get(&coffee).unwrap();
        assert!(!item.on_shopping_list);
        assert!(item.in_stock);

        // Milk was only listed, so it becomes hidden
        let milk = ItemId::from("demo-1");
        catalog.mark_bought(&milk).unwrap();
        assert!(catalog.get(&milk).unwrap().is_hidden());
    }

    #[test]
    fn test_rename() {
        let mut catalog = Catalog::demo();
        let id = ItemId::from("demo-3");
        catalog.rename(&id, " Sourdough ").unwrap();
        assert_eq!(catalog.get(&id).unwrap().name, "Sourdough");
        assert_eq!(catalog.rename(&id, "  "), Err(CatalogError::EmptyName));
    }

    #[test]
    fn test_predicate_matches_flag() {
        let entry = CatalogEntry::new("x", "Tea").with_flag(ActivationFlag::InStock);
        assert!(ActivationFlag::InStock.predicate().matches(&entry));
        assert!(!ActivationFlag::OnShoppingList.predicate().matches(&entry));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let catalog = Catalog::demo();
        let file = CatalogFile {
            version: CATALOG_VERSION,
            items: catalog.entries().to_vec(),
        };
        let json = serde_json::to_string(&file).unwrap();
        let loaded: CatalogFile = serde_json::from_str(&json).unwrap();
        assert_eq!(Catalog::from_entries(loaded.items), catalog);
        assert_eq!(loaded.version, 1);
    }

    #[test]
    fn test_flag_serializes_kebab_case() {
        let json = serde_json::to_string(&ActivationFlag::OnShoppingList).unwrap();
        assert_eq!(json, "\"on-shopping-list\"");
    }
}
