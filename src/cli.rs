//! Command-line argument parsing for the pantry binary
//!
//! Supports:
//! - Showing a list page (shopping or stock)
//! - Adding items through the omnibox
//! - Flag toggles, marking bought, renaming
//! - Replaying keystroke scripts against a virtual field

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::ActivationFlag;
use crate::config::PantryConfig;
use crate::script::{parse_script, Keystroke};

/// Household pantry and shopping list
#[derive(Parser, Debug)]
#[command(name = "pantry", version, about = "Household pantry and shopping list")]
pub struct CliArgs {
    /// Catalog file (defaults to ~/.config/pantry/catalog.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Which list to work against
    #[arg(long, global = true, value_enum)]
    pub list: Option<ListArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// List selector
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListArg {
    Shopping,
    Stock,
}

impl From<ListArg> for ActivationFlag {
    fn from(list: ListArg) -> Self {
        match list {
            ListArg::Shopping => ActivationFlag::OnShoppingList,
            ListArg::Stock => ActivationFlag::InStock,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the items on the list
    List,
    /// Rank catalog entries against a partial name
    Suggest { query: String },
    /// Type a name into the omnibox and submit it
    Add { name: String },
    /// Flip an item's flag
    Toggle {
        name: String,
        #[arg(long, value_enum)]
        flag: ListArg,
    },
    /// Take an item off the shopping list
    Bought { name: String },
    /// Rename an item
    Rename { name: String, new_name: String },
    /// Group matching items the way the list page does
    Search { query: String },
    /// Replay a keystroke script, e.g. `A,p,<bs>,<enter>`
    Type { keys: String },
}

/// What to do, resolved against the loaded config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Suggest(String),
    Add(String),
    Toggle(String, ActivationFlag),
    Bought(String),
    Rename(String, String),
    Search(String),
    Type(Vec<Keystroke>),
}

impl Action {
    /// Whether this action can change the catalog
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Action::Add(_)
                | Action::Toggle(..)
                | Action::Bought(_)
                | Action::Rename(..)
                | Action::Type(_)
        )
    }
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub catalog_path: Option<PathBuf>,
    /// Activation flag of the list page in use
    pub flag: ActivationFlag,
    pub action: Action,
    pub seed_demo_items: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into an invocation
    pub fn into_config(self, config: &PantryConfig) -> Result<Invocation, String> {
        let flag = self
            .list
            .map(ActivationFlag::from)
            .unwrap_or_else(|| config.default_list.flag());

        let action = match self.command.unwrap_or(Command::List) {
            Command::List => Action::List,
            Command::Suggest { query } => Action::Suggest(query),
            Command::Add { name } => Action::Add(non_blank(name, "Item name")?),
            Command::Toggle { name, flag } => Action::Toggle(name, flag.into()),
            Command::Bought { name } => Action::Bought(name),
            Command::Rename { name, new_name } => {
                Action::Rename(name, non_blank(new_name, "New name")?)
            }
            Command::Search { query } => Action::Search(query),
            Command::Type { keys } => Action::Type(parse_script(&keys).map_err(|e| e.to_string())?),
        };

        Ok(Invocation {
            catalog_path: self.catalog.or_else(|| config.catalog_path()),
            flag,
            action,
            seed_demo_items: config.seed_demo_items,
        })
    }
}

fn non_blank(value: String, what: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", what))
    } else {
        Ok(value)
    }
}

impl Invocation {
    pub fn list_label(&self) -> &'static str {
        match self.flag {
            ActivationFlag::OnShoppingList => "Shopping list",
            ActivationFlag::InStock => "Stock",
        }
    }
}
