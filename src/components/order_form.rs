//! Order Form Component
//!
//! Create/edit form bound to the draft in the admin store.
//! Only rendered while the store is in Creating or Editing mode.

use leptos::prelude::*;

use crate::models::{PaymentMethod, PaymentStatus};
use crate::state::{AdminEvent, AdminStateStoreFields, FormField, Mode};
use crate::store::{self, use_admin_store};

/// Labelled input bound to one draft field
#[component]
fn DraftInput(
    field: FormField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = true)] required: bool,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    let store = use_admin_store();

    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=input_type
                required=required
                step=step
                prop:value=move || store.draft().read().value(field)
                on:input=move |ev| {
                    store::dispatch(&store, AdminEvent::FieldChanged(field, event_target_value(&ev)));
                }
            />
        </label>
    }
}

#[component]
pub fn OrderForm() -> impl IntoView {
    let store = use_admin_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store::submit_form(store);
    };

    let is_editing = move || matches!(store.mode().get(), Mode::Editing(_));

    view! {
        <form class="order-form" on:submit=on_submit>
            <h2>{move || if is_editing() { "Edit Order" } else { "New Order" }}</h2>

            <div class="form-grid">
                <DraftInput field=FormField::FullName label="Full Name" />
                <DraftInput field=FormField::Email label="Email" input_type="email" />
                <DraftInput field=FormField::Phone label="Phone" />
                <DraftInput field=FormField::Address label="Address" />
                <DraftInput field=FormField::City label="City" />
                <DraftInput field=FormField::PostalCode label="Postal Code" />
                <DraftInput field=FormField::Country label="Country" />

                <label class="form-field">
                    <span>"Payment Method"</span>
                    <select
                        prop:value=move || store.draft().read().payment_method.as_str()
                        on:change=move |ev| {
                            store::dispatch(&store, AdminEvent::FieldChanged(FormField::PaymentMethod, event_target_value(&ev)));
                        }
                    >
                        {PaymentMethod::ALL.into_iter().map(|method| view! {
                            <option value=method.as_str()>{method.label()}</option>
                        }).collect_view()}
                    </select>
                </label>

                <label class="form-field">
                    <span>"Payment Status"</span>
                    <select
                        prop:value=move || store.draft().read().payment_status.as_str()
                        on:change=move |ev| {
                            store::dispatch(&store, AdminEvent::FieldChanged(FormField::PaymentStatus, event_target_value(&ev)));
                        }
                    >
                        {PaymentStatus::ALL.into_iter().map(|status| view! {
                            <option value=status.as_str()>{status.label()}</option>
                        }).collect_view()}
                    </select>
                </label>

                // Committed on change so partial numbers are not reformatted mid-typing
                <label class="form-field">
                    <span>"Amount"</span>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        required=true
                        prop:value=move || store.draft().read().value(FormField::Amount)
                        on:change=move |ev| {
                            store::dispatch(&store, AdminEvent::FieldChanged(FormField::Amount, event_target_value(&ev)));
                        }
                    />
                </label>

                <DraftInput field=FormField::CreatedAt label="Created At" input_type="datetime-local" required=false step="1" />
                <DraftInput field=FormField::CartItems label="Cart Items (comma separated)" required=false />
            </div>

            <div class="form-actions">
                <button type="submit" class="submit-btn">
                    {move || if is_editing() { "Update" } else { "Create" }}
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| store::dispatch(&store, AdminEvent::Cancel)
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
