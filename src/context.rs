//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AdminContext {
    /// Trigger to re-fetch orders from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch orders from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AdminContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// Trigger a re-fetch of all orders
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

impl Default for AdminContext {
    fn default() -> Self {
        Self::new()
    }
}
