//! Entry List Component
//!
//! Displays the ranked sequence with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit drop slots between rows.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::EntryRow;
use crate::context::AppContext;
use crate::store::{store_move_entry, use_app_store, AppStateStoreFields};

/// Entry list component with DnD support
#[component]
pub fn EntryList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |dragged_id, slot| {
        let Some(from) = store.list().get().position_of(dragged_id) else {
            web_sys::console::error_1(&format!("[DND] Dropped unknown entry {}", dragged_id).into());
            return;
        };
        // Removing the dragged row first shifts every slot below it up by one
        let to = if slot > from { slot - 1 } else { slot };
        web_sys::console::log_1(&format!("[DND] Drop: entry={}, from={}, to={}", dragged_id, from, to).into());
        if let Err(e) = store_move_entry(&store, from, to) {
            ctx.notify(e);
        }
    });

    let ranked = move || {
        store
            .list()
            .get()
            .entries()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="entry-list">
            // Initial drop slot above the first row
            <SlotBar dnd=dnd slot=0 />

            <For
                each=ranked
                key=|(position, entry)| {
                    // Wide key: any field change re-renders the row
                    (
                        entry.id,
                        *position,
                        entry.score.map(f64::to_bits),
                        entry.pinned,
                        entry.repeat,
                    )
                }
                children=move |(position, entry)| {
                    let id = entry.id;

                    // DnD handlers
                    let on_mousedown = make_on_mousedown(dnd, id);

                    // Visual state
                    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
                    let wrapper_class = move || {
                        if is_dragging() { "entry-wrapper dragging" } else { "entry-wrapper" }
                    };

                    view! {
                        <div class=wrapper_class on:mousedown=on_mousedown>
                            <EntryRow entry=entry.clone() position=position />
                        </div>

                        // Drop slot below this row
                        <SlotBar dnd=dnd slot=position + 1 />
                    }
                }
            />
        </div>
    }
}

/// Drop slot component - a horizontal separator between rows
#[component]
pub fn SlotBar(dnd: DndSignals, slot: DropSlot) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Is this slot the current drop target?
    let is_active = move || dnd.drop_slot_read.get() == Some(slot);

    // Only show while dragging
    let is_dragging = move || dnd.dragging_id_read.get().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
