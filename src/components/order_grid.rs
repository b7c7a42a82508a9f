//! Order Grid Component
//!
//! Responsive grid of order cards.

use leptos::prelude::*;

use crate::components::OrderCard;
use crate::state::AdminStateStoreFields;
use crate::store::use_admin_store;

#[component]
pub fn OrderGrid() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="order-grid">
            <For
                each=move || store.orders().get()
                key=|order| order.id.clone()
                children=move |order| view! { <OrderCard id=order.id /> }
            />
        </div>
        <Show when=move || store.orders().read().is_empty()>
            <p class="empty-state">"No orders found."</p>
        </Show>
    }
}
