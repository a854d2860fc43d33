//! User Modal Component
//!
//! Username prompt with the fetch trigger. At most one fetch is in
//! flight at a time; the trigger stays disabled until it settles, and a
//! failed fetch leaves the list untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::store::{store_replace_entries, use_app_store, AppStateStoreFields};

#[component]
pub fn UserModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (input_value, set_input_value) = signal(String::new());
    let fetching = move || store.fetching().get();

    let fetch_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = input_value.get();
        if username.trim().is_empty() || store.fetching().get() {
            return;
        }
        store.fetching().set(true);

        spawn_local(async move {
            web_sys::console::log_1(&format!("[FETCH] Loading completed list for {}", username).into());
            match api::fetch_completed_list(username.trim()).await {
                Ok(entries) => {
                    web_sys::console::log_1(&format!("[FETCH] Loaded {} entries", entries.len()).into());
                    store_replace_entries(&store, entries);
                    *store.username().write() = username;
                    ctx.clear_status();
                    set_open.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[FETCH] {}", e).into());
                    ctx.notify(e);
                }
            }
            store.fetching().set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2>"Get user data"</h2>
                    <form class="user-form" on:submit=fetch_list>
                        <input
                            type="text"
                            placeholder="Username"
                            prop:value=move || input_value.get()
                            on:input=move |ev| set_input_value.set(event_target_value(&ev))
                        />
                        <button type="submit" disabled=move || fetching()>
                            {move || if fetching() { "Fetching..." } else { "Fetch" }}
                        </button>
                    </form>
                    <p class="modal-note">
                        "Pin at least two rows before generating, starting with the top one. "
                        "Rows below the lowest pin keep their current scores, so also pin the "
                        "last row you care about. After generating, drag rows around and "
                        "generate again to refresh the scores."
                    </p>
                </div>
            </div>
        </Show>
    }
}
