//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use folio_core::{ContentStore, HomeView, ProjectsView, SqliteStorage};

fn main() {
    // In-memory storage keeps the probe side-effect free.
    let storage = match SqliteStorage::open_in_memory() {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("folio_core storage error: {err}");
            std::process::exit(1);
        }
    };
    let store = ContentStore::init(storage);

    let home = HomeView::new(&store);
    let projects = ProjectsView::new(&store);
    println!("folio_core version={}", folio_core::core_version());
    println!("folio_core hero={}", home.hero().name);
    println!("folio_core projects={}", projects.projects().len());
}
