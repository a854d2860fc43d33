//! Entry Row Component
//!
//! One row of the ranked list: pin toggle, cover, title, repeat badge,
//! and the score input.

use leptos::prelude::*;

use score_engine::Entry;

use crate::context::AppContext;
use crate::store::{store_set_score, store_toggle_pin, use_app_store};

/// A single entry row
#[component]
pub fn EntryRow(entry: Entry, position: usize) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = entry.id;
    let pinned = entry.pinned;
    let title = entry.title.clone();
    let cover_url = entry.cover_url.clone();
    let repeat = entry.repeat;
    let score = entry.score;

    let toggle_pin = move |_| {
        if let Err(e) = store_toggle_pin(&store, id) {
            ctx.notify(e);
        }
    };

    let commit_score = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        let parsed = if raw.trim().is_empty() {
            None
        } else {
            match raw.trim().parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    ctx.notify(format!("\"{}\" is not a score", raw));
                    return;
                }
            }
        };
        if let Err(e) = store_set_score(&store, id, parsed) {
            ctx.notify(e);
        }
    };

    view! {
        <div class=if pinned { "entry-row pinned" } else { "entry-row" }>
            <span class="entry-rank">{format!("#{}", position + 1)}</span>

            <button
                class=if pinned { "pin-btn active" } else { "pin-btn" }
                title=if pinned { "Unpin" } else { "Pin at this score" }
                on:click=toggle_pin
            >
                "📌"
            </button>

            {cover_url.map(|url| view! { <img class="entry-cover" src=url alt="" /> })}

            <span class="entry-title">{title}</span>
            <span class="entry-repeat" title="Times re-read">{repeat}</span>

            <span class="entry-score">
                {score.map(|s| format!("{:.1}", s)).unwrap_or_else(|| "·".to_string())}
            </span>

            <input
                class="score-input"
                type="number"
                min="0"
                max="10"
                step="0.5"
                placeholder="Score"
                prop:value=score.map(|s| s.to_string()).unwrap_or_default()
                on:change=commit_score
            />
        </div>
    }
}
