//! Delete Confirm Button Component
//!
//! Inline delete confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" while `pending` is false. Clicking it runs `on_request`;
/// the owner then flips `pending` and "Delete this order?" appears with
/// Yes/No buttons. Only "Yes" runs `on_confirm`.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `pending` - Whether the confirmation is showing
/// * `on_request` - Delete clicked
/// * `on_confirm` - User confirmed deletion
/// * `on_decline` - User declined
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_request: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_decline: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || !pending.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_request.run(());
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || pending.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this order?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_decline.run(());
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
