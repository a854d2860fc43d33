//! Score-Pin App
//!
//! Main application component: header with the generate action, status
//! line, the ranked entry list, and the username modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EntryList, UserModal};
use crate::context::AppContext;
use crate::store::{store_generate, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let (status, set_status) = signal(None::<String>);
    let (modal_open, set_modal_open) = signal(true);

    let ctx = AppContext::new((status, set_status));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    let generate = move |_| match store_generate(&store) {
        Ok(()) => {
            web_sys::console::log_1(&"[GEN] Interpolation pass applied".into());
            ctx.clear_status();
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[GEN] {}", e).into());
            ctx.notify(e);
        }
    };

    let header_line = move || {
        let username = store.username().get();
        if username.is_empty() {
            "Score-Pin".to_string()
        } else {
            format!("Score-Pin: {}", username)
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{header_line}</h1>
                <div class="header-actions">
                    <button class="generate-btn" on:click=generate>"Generate"</button>
                    <button class="change-user-btn" on:click=move |_| set_modal_open.set(true)>
                        "Change user"
                    </button>
                </div>
            </header>

            {move || status.get().map(|msg| view! { <p class="status-line">{msg}</p> })}

            <EntryList />

            <p class="entry-count">
                {move || format!("{} entries", store.list().get().len())}
            </p>

            <UserModal open=modal_open set_open=set_modal_open />
        </div>
    }
}
