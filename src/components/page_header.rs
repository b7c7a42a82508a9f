//! Page Header Component
//!
//! Title plus the "Add New Order" and "Refresh" actions.

use leptos::prelude::*;

use crate::context::AdminContext;
use crate::state::AdminEvent;
use crate::store::{self, use_admin_store};

#[component]
pub fn PageHeader() -> impl IntoView {
    let store = use_admin_store();
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");

    view! {
        <header class="page-header">
            <h1>"Orders Admin"</h1>
            <div class="header-actions">
                <button
                    class="add-btn"
                    on:click=move |_| store::dispatch(&store, AdminEvent::BeginCreate)
                >
                    "Add New Order"
                </button>
                <button class="refresh-btn" on:click=move |_| ctx.reload()>
                    "Refresh"
                </button>
            </div>
        </header>
    }
}
