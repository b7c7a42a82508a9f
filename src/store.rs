//! Global Application State Store
//!
//! Wraps `AdminState` in a reactive store and runs the store calls whose
//! results feed back in as events.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::state::{AdminEvent, AdminState, Submission};

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

/// Apply one event to the store
pub fn dispatch(store: &AdminStore, event: AdminEvent) {
    store.update(|state| *state = std::mem::take(state).apply(event));
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

// ========================
// Store Actions
// ========================

/// Fetch all orders; on failure the current list stays as it is
pub fn load_orders(store: AdminStore) {
    spawn_local(async move {
        match commands::list_orders().await {
            Ok(orders) => {
                web_sys::console::log_1(&format!("[ORDERS] Loaded {} orders", orders.len()).into());
                dispatch(&store, AdminEvent::Loaded(orders));
            }
            Err(e) => log_error(&format!("[ORDERS] Error fetching orders: {}", e)),
        }
    });
}

/// Send the form to the store as a create or an update
pub fn submit_form(store: AdminStore) {
    let Some(submission) = store.with_untracked(AdminState::submission) else {
        return;
    };

    spawn_local(async move {
        let result = match &submission {
            Submission::Create(fields) => commands::create_order(fields).await,
            Submission::Update { id, fields } => commands::update_order(id, fields).await,
        };
        if let Err(e) = &result {
            match &submission {
                Submission::Create(_) => {
                    log_error(&format!("[ORDERS] Error creating order: {}", e));
                    alert("Failed to create order");
                }
                Submission::Update { id, .. } => {
                    log_error(&format!("[ORDERS] Error updating order {}: {}", id, e));
                    alert("Failed to update order");
                }
            }
        }
        store.update(|state| *state = std::mem::take(state).settle(&submission, result));
    });
}

/// "Yes" on the delete confirmation: delete the pending order
pub fn confirm_delete(store: AdminStore) {
    let mut target = None;
    store.update(|state| target = state.take_pending_delete());
    let Some(id) = target else {
        return;
    };

    spawn_local(async move {
        match commands::delete_order(&id).await {
            Ok(()) => dispatch(&store, AdminEvent::Deleted(id)),
            Err(e) => {
                log_error(&format!("[ORDERS] Error deleting order {}: {}", id, e));
                alert("Failed to delete order");
            }
        }
    });
}
