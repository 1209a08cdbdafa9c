//! Benchmarks for the omnibox keystroke path (update + frame application)
//!
//! Run with: cargo bench keystrokes

mod support;

use pantry::catalog::{ActivationFlag, CatalogEntry};
use pantry::omnibox::{CatalogHost, OmniboxDriver, VirtualField};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Read-only host: submissions create nothing
struct StaticHost {
    items: Vec<CatalogEntry>,
}

impl CatalogHost for StaticHost {
    fn entries(&self) -> &[CatalogEntry] {
        &self.items
    }

    fn activate_item(&mut self, _entry: &CatalogEntry) {}

    fn create_item(&mut self, _name: &str) -> Option<CatalogEntry> {
        None
    }
}

fn driver() -> OmniboxDriver<VirtualField> {
    OmniboxDriver::new(
        ActivationFlag::OnShoppingList.predicate(),
        VirtualField::new(),
    )
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn type_word(bencher: divan::Bencher, size: usize) {
    let mut host = StaticHost {
        items: support::make_catalog(size),
    };
    bencher.bench_local(|| {
        let mut ob = driver();
        ob.type_text("coffee milk", &mut host);
        divan::black_box(ob.field.render());
    });
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn type_delete_retype(bencher: divan::Bencher, size: usize) {
    let mut host = StaticHost {
        items: support::make_catalog(size),
    };
    bencher.bench_local(|| {
        let mut ob = driver();
        ob.type_text("bre", &mut host);
        ob.backspace(&mut host);
        ob.backspace(&mut host);
        ob.type_text("ut", &mut host);
        divan::black_box(ob.enter(&mut host));
    });
}
