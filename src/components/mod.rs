//! UI Components
//!
//! Leptos components for the orders admin page.

mod page_header;
mod order_form;
mod order_grid;
mod order_card;
mod delete_confirm_button;

pub use page_header::PageHeader;
pub use order_form::OrderForm;
pub use order_grid::OrderGrid;
pub use order_card::OrderCard;
pub use delete_confirm_button::DeleteConfirmButton;
