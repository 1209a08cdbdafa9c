use anyhow::{anyhow, Result};
use clap::Parser;

use pantry::catalog::{ActivationFlag, Catalog, CatalogEntry};
use pantry::cli::{Action, CliArgs, Invocation};
use pantry::config::PantryConfig;
use pantry::config_paths;
use pantry::omnibox::{completes, rank_suggestions, OmniboxDriver, SubmitOutcome, VirtualField};
use pantry::page::ListPage;
use pantry::script::replay;
use pantry::search::SearchResults;

fn main() -> Result<()> {
    pantry::tracing::init();

    let config = PantryConfig::load();
    if config_paths::config_file().is_some_and(|path| !path.exists()) {
        // First run: leave an editable config with the defaults behind
        if let Err(e) = config.save() {
            tracing::warn!("Could not write default config: {}", e);
        }
    }
    let invocation = CliArgs::parse()
        .into_config(&config)
        .map_err(|e| anyhow!(e))?;

    let path = invocation
        .catalog_path
        .clone()
        .ok_or_else(|| anyhow!("No catalog location available; pass --catalog"))?;

    let mut catalog = Catalog::load(&path)?;
    let mut seeded = false;
    if catalog.is_empty() && invocation.seed_demo_items {
        tracing::info!("Seeding demo items into {}", path.display());
        catalog = Catalog::demo();
        seeded = true;
    }

    let changed = run(&invocation, &mut catalog)?;
    if seeded || (changed && invocation.action.mutates()) {
        catalog.save(&path)?;
    }
    Ok(())
}

/// Carry out the action, returning whether the catalog changed
fn run(invocation: &Invocation, catalog: &mut Catalog) -> Result<bool> {
    let flag = invocation.flag;

    match &invocation.action {
        Action::List => {
            let page = ListPage::new(catalog, flag);
            let items = page.active_items();
            println!("{} ({})", invocation.list_label(), items.len());
            for item in items {
                println!("  {}", describe(item));
            }
            Ok(false)
        }
        Action::Suggest(query) => {
            for (rank, entry) in rank_suggestions(catalog.entries(), query).iter().enumerate() {
                let marker = if rank == 0 && completes(&entry.name, query.trim()) {
                    "*"
                } else {
                    " "
                };
                println!("{} {}", marker, entry.name);
            }
            Ok(false)
        }
        Action::Search(query) => {
            let results = SearchResults::new(catalog.entries(), query, &flag.predicate());
            if !results.has_query() {
                println!("Nothing to search for");
                return Ok(false);
            }
            if results.is_empty() {
                println!("No matches. `pantry add \"{}\"` to create it.", query.trim());
            }
            print_group("Available to add", &results.visible_addable);
            print_group("Hidden items", &results.hidden);
            print_group(&format!("On {}", flag.label()), &results.active);
            Ok(false)
        }
        Action::Add(name) => {
            let mut page = ListPage::new(catalog, flag);
            let mut driver = OmniboxDriver::new(page.is_active(), VirtualField::new());
            let dispatch = driver.submit_text(name, &mut page);
            match dispatch.outcome {
                Some(SubmitOutcome::Created(entry)) => {
                    println!("Added '{}' to {}", entry.name, flag.label())
                }
                Some(SubmitOutcome::Reactivated(entry)) => {
                    println!("Put '{}' back on {}", entry.name, flag.label())
                }
                Some(SubmitOutcome::Existing(entry)) => {
                    println!("'{}' is already on {}", entry.name, flag.label())
                }
                Some(SubmitOutcome::Noop) | None => println!("Nothing to add"),
            }
            Ok(page.dirty)
        }
        Action::Toggle(name, toggled) => {
            let id = lookup(catalog, name)?;
            let now_set = catalog.toggle(&id, *toggled)?;
            println!(
                "'{}' {} {}",
                name.trim(),
                if now_set { "now on" } else { "removed from" },
                toggled.label()
            );
            Ok(true)
        }
        Action::Bought(name) => {
            let id = lookup(catalog, name)?;
            catalog.mark_bought(&id)?;
            println!("Bought '{}'", name.trim());
            Ok(true)
        }
        Action::Rename(name, new_name) => {
            let id = lookup(catalog, name)?;
            catalog.rename(&id, new_name)?;
            println!("Renamed '{}' to '{}'", name.trim(), new_name.trim());
            Ok(true)
        }
        Action::Type(script) => {
            let mut page = ListPage::new(catalog, flag);
            let mut driver = OmniboxDriver::new(page.is_active(), VirtualField::new());
            for frame in replay(&mut driver, &mut page, script) {
                println!("{}", frame);
            }
            Ok(page.dirty)
        }
    }
}

fn lookup(catalog: &Catalog, name: &str) -> Result<pantry::catalog::ItemId> {
    catalog
        .find_by_name(name)
        .map(|entry| entry.id.clone())
        .ok_or_else(|| anyhow!("No item named '{}'", name.trim()))
}

fn describe(entry: &CatalogEntry) -> String {
    let mut flags = Vec::new();
    if entry.is_set(ActivationFlag::InStock) {
        flags.push("in stock");
    }
    if entry.is_set(ActivationFlag::OnShoppingList) {
        flags.push("to buy");
    }
    format!("{} ({})", entry.name, flags.join(", "))
}

fn print_group(title: &str, entries: &[&CatalogEntry]) {
    if entries.is_empty() {
        return;
    }
    println!("{}", title);
    for entry in entries {
        println!("  {}", describe(entry));
    }
}
