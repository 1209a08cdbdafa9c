//! Smart search-and-create field.
//!
//! One text input that completes against a live catalog while the user
//! types, stays out of the way of IME composition and deletions, and on
//! submit either activates an existing entry, points at an already-active
//! one, or creates a new one.
//!
//! # Architecture
//!
//! - [`matcher`]: pure suggestion ranking
//! - [`classify`]: decides whether a change event is an insertion or deletion
//! - [`update`]: the state machine, `(state, event) -> (state, commands)`
//! - [`submit`]: resolves a committed value against the catalog
//! - [`field`]: the host field contract (paint, then select, once)
//! - [`driver`]: executes commands against a field and a [`CatalogHost`]
//!
//! # Example
//!
//! ```ignore
//! use pantry::catalog::{ActivationFlag, Catalog};
//! use pantry::omnibox::{OmniboxDriver, VirtualField};
//! use pantry::page::ListPage;
//!
//! let mut catalog = Catalog::demo();
//! let mut page = ListPage::new(&mut catalog, ActivationFlag::OnShoppingList);
//! let mut driver = OmniboxDriver::new(page.is_active(), VirtualField::new());
//!
//! driver.type_str("Co", &mut page);
//! assert_eq!(driver.field.render(), "Co[ffee]");
//! ```

pub mod classify;
pub mod commands;
pub mod driver;
pub mod field;
pub mod matcher;
pub mod messages;
pub mod selection;
pub mod state;
pub mod submit;
pub mod update;

pub use classify::{classify, EditKind, InputType};
pub use commands::Cmd;
pub use driver::{Dispatch, OmniboxDriver};
pub use field::{apply_frame, FieldEvent, HostField, VirtualField};
pub use matcher::{best_suggestion, completes, normalize_name, rank_suggestions};
pub use messages::{Key, OmniboxMsg};
pub use selection::SelectionRange;
pub use state::{ActivePredicate, Mode, Omnibox, OmniboxState};
pub use submit::{resolve, CatalogHost, Resolution, SubmitOutcome};
pub use update::update;
