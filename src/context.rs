//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Status line under the header - read
    pub status: ReadSignal<Option<String>>,
    /// Status line - write
    set_status: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(status: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            status: status.0,
            set_status: status.1,
        }
    }

    /// Surface a user-visible message; fetch, store and engine failures
    /// all land here
    pub fn notify(&self, msg: impl Into<String>) {
        self.set_status.set(Some(msg.into()));
    }

    /// Clear the status line
    pub fn clear_status(&self) {
        self.set_status.set(None);
    }
}
