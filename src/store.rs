//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All list
//! mutation goes through the helpers here, which delegate to the core
//! `RankedList` operations and map failures to boundary strings.

use leptos::prelude::*;
use reactive_stores::Store;

use score_engine::{interpolate, Entry, RankedList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The session's working sequence, ranked best-first
    pub list: RankedList,
    /// Username the current list was fetched for
    pub username: String,
    /// A fetch is in flight; the fetch trigger stays disabled while set
    pub fetching: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install a freshly fetched or freshly generated sequence wholesale
pub fn store_replace_entries(store: &AppStore, entries: Vec<Entry>) {
    store.list().write().replace_all(entries);
}

/// Toggle the pin flag on one entry
pub fn store_toggle_pin(store: &AppStore, id: u32) -> Result<(), String> {
    store
        .list()
        .write()
        .update(id, |entry| entry.pinned = !entry.pinned)
        .map_err(|e| e.to_string())
}

/// Set or clear one entry's score, in place, without reordering
pub fn store_set_score(store: &AppStore, id: u32, score: Option<f64>) -> Result<(), String> {
    store
        .list()
        .write()
        .update(id, |entry| entry.score = score)
        .map_err(|e| e.to_string())
}

/// Move the entry at `from` to `to`, shifting the rows in between
pub fn store_move_entry(store: &AppStore, from: usize, to: usize) -> Result<(), String> {
    store
        .list()
        .write()
        .move_entry(from, to)
        .map_err(|e| e.to_string())
}

/// Run an interpolation pass over the current sequence. The store is only
/// written when the whole pass succeeds.
pub fn store_generate(store: &AppStore) -> Result<(), String> {
    let snapshot = store.list().get();
    let generated = interpolate(snapshot.entries()).map_err(|e| e.to_string())?;
    store.list().write().replace_all(generated);
    Ok(())
}
