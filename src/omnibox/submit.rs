//! Submission: turning the committed value into a catalog action.
//!
//! Resolution is pure (it only reads the catalog); applying it is the only
//! place the omnibox calls back into the collaborator that owns the catalog.

use crate::catalog::CatalogEntry;

use super::matcher::normalize_name;
use super::state::ActivePredicate;

/// The collaborator that owns the catalog
pub trait CatalogHost {
    /// Current catalog snapshot
    fn entries(&self) -> &[CatalogEntry];

    /// Set this field's activation flag on `entry` and stamp it
    fn activate_item(&mut self, entry: &CatalogEntry);

    /// Create an entry named `name`, or return the existing entry with that
    /// normalized name. `None` means nothing could be created.
    fn create_item(&mut self, name: &str) -> Option<CatalogEntry>;

    /// `entry` is already active; draw the user's attention to it
    fn on_existing_active(&mut self, _entry: &CatalogEntry) {}

    /// The typed query changed (trimmed)
    fn on_query_change(&mut self, _query: &str) {}
}

/// What a submission should do, decided against a catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Blank input
    Noop,
    /// Exact match that is already active
    Existing(CatalogEntry),
    /// Exact match that is not active
    Reactivate(CatalogEntry),
    /// No match; create an entry with this (trimmed) name
    Create(String),
}

/// Outcome of applying a [`Resolution`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Noop,
    Existing(CatalogEntry),
    Reactivated(CatalogEntry),
    Created(CatalogEntry),
}

impl SubmitOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitOutcome::Noop => "noop",
            SubmitOutcome::Existing(_) => "existing",
            SubmitOutcome::Reactivated(_) => "reactivated",
            SubmitOutcome::Created(_) => "created",
        }
    }

    pub fn entry(&self) -> Option<&CatalogEntry> {
        match self {
            SubmitOutcome::Noop => None,
            SubmitOutcome::Existing(e)
            | SubmitOutcome::Reactivated(e)
            | SubmitOutcome::Created(e) => Some(e),
        }
    }
}

/// Decide what submitting `value` means for `catalog`
pub fn resolve(value: &str, catalog: &[CatalogEntry], is_active: &ActivePredicate) -> Resolution {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Resolution::Noop;
    }

    let wanted = normalize_name(trimmed);
    match catalog
        .iter()
        .find(|entry| normalize_name(&entry.name) == wanted)
    {
        Some(entry) if is_active.matches(entry) => Resolution::Existing(entry.clone()),
        Some(entry) => Resolution::Reactivate(entry.clone()),
        None => Resolution::Create(trimmed.to_string()),
    }
}

impl Resolution {
    /// Run the collaborator callbacks for this resolution
    pub fn apply<H: CatalogHost + ?Sized>(self, host: &mut H) -> SubmitOutcome {
        match self {
            Resolution::Noop => SubmitOutcome::Noop,
            Resolution::Existing(entry) => {
                host.on_existing_active(&entry);
                SubmitOutcome::Existing(entry)
            }
            Resolution::Reactivate(entry) => {
                host.activate_item(&entry);
                SubmitOutcome::Reactivated(entry)
            }
            Resolution::Create(name) => match host.create_item(&name) {
                Some(entry) => {
                    host.activate_item(&entry);
                    SubmitOutcome::Created(entry)
                }
                None => {
                    tracing::warn!(target: "omnibox", "create_item('{}') returned nothing", name);
                    SubmitOutcome::Noop
                }
            },
        }
    }
}
