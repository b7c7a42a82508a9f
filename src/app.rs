//! Orders Admin App
//!
//! Single page: header, optional create/edit form, and the order grid.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{OrderForm, OrderGrid, PageHeader};
use crate::context::AdminContext;
use crate::state::{AdminState, AdminStateStoreFields};
use crate::store;

#[component]
pub fn App() -> impl IntoView {
    let admin_store = Store::new(AdminState::default());
    let ctx = AdminContext::new();

    // Provide context to all children
    provide_context(admin_store);
    provide_context(ctx);

    // Load orders on mount and whenever Refresh bumps the trigger
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading orders, trigger={}", trigger).into());
        store::load_orders(admin_store);
    });

    view! {
        <div class="orders-admin">
            <PageHeader />

            <Show when=move || admin_store.with(AdminState::form_open)>
                <OrderForm />
            </Show>

            <OrderGrid />

            <p class="order-count">{move || format!("{} orders", admin_store.orders().read().len())}</p>
        </div>
    }
}
