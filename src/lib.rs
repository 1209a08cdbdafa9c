//! Pantry - household stock and shopping list tracker
//!
//! This crate provides the catalog, the list pages built on it, and the
//! smart omnibox used to search and add items, implemented in the Elm
//! Architecture style (`update(state, msg) -> Option<Cmd>`).

pub mod catalog;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod omnibox;
pub mod page;
pub mod script;
pub mod search;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use catalog::{ActivationFlag, Catalog, CatalogEntry, CatalogError, ItemId};
pub use config::PantryConfig;
pub use omnibox::{Omnibox, OmniboxDriver, OmniboxMsg, VirtualField};
pub use page::ListPage;
