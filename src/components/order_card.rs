//! Order Card Component
//!
//! One order in the grid, with Edit and Delete actions.
//! Fields are read from the store by ID so the card always shows the
//! current entry.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::Order;
use crate::state::{AdminEvent, AdminStateStoreFields};
use crate::store::{self, use_admin_store};

#[component]
pub fn OrderCard(id: String) -> impl IntoView {
    let store = use_admin_store();

    let current = {
        let id = id.clone();
        Memo::new(move |_| store.orders().with(|orders| orders.iter().find(|o| o.id == id).cloned()))
    };
    let field = move |pick: fn(&Order) -> String| {
        move || current.with(|order| order.as_ref().map(pick).unwrap_or_default())
    };

    let pending = {
        let id = id.clone();
        Signal::derive(move || store.pending_delete().read().as_deref() == Some(id.as_str()))
    };

    let edit_id = id.clone();
    let on_edit = move |_| store::dispatch(&store, AdminEvent::BeginEdit(edit_id.clone()));
    let on_request = Callback::new(move |_: ()| store::dispatch(&store, AdminEvent::RequestDelete(id.clone())));
    let on_decline = Callback::new(move |_: ()| store::dispatch(&store, AdminEvent::DeclineDelete));
    let on_confirm = Callback::new(move |_: ()| store::confirm_delete(store));

    view! {
        <div class="order-card">
            <h3 class="order-name">{field(|o| o.full_name.clone())}</h3>
            <p><span class="label">"Email: "</span>{field(|o| o.email.clone())}</p>
            <p><span class="label">"Phone: "</span>{field(|o| o.phone.clone())}</p>
            <p><span class="label">"City: "</span>{field(|o| o.city.clone())}</p>
            <p><span class="label">"Amount: "</span>{field(|o| format!("{:.2}", o.amount))}</p>
            <p><span class="label">"Created: "</span>{field(|o| o.created_at.clone())}</p>
            <div class="order-actions">
                <button class="edit-btn" on:click=on_edit>"Edit"</button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    pending=pending
                    on_request=on_request
                    on_confirm=on_confirm
                    on_decline=on_decline
                />
            </div>
        </div>
    }
}
