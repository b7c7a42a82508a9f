//! Order Entity
//!
//! A customer purchase record kept as a document in the remote store.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Document type tag for orders in the store
pub const ORDER_TYPE: &str = "order";

/// How the customer pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Cash,
}

/// Whether the order is settled
///
/// Independent of `PaymentMethod`: a cash order may still be marked paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "paid")]
    Paid,
    #[serde(rename = "cash on delivery")]
    CashOnDelivery,
}

/// A stored order document
///
/// Any field may be missing in the store; missing fields decode to defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub amount: f64,
    /// ISO-8601 timestamp
    pub created_at: String,
    pub cart_items: Vec<String>,
}

/// Mutable field set of an order, as sent to create and patch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub cart_items: Vec<String>,
}

/// Format a timestamp the way stored orders carry it (`2024-05-01T09:30:00.000Z`)
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl OrderFields {
    /// Fill in `created_at` with `now` when it is absent or blank
    pub fn stamped(mut self, now: DateTime<Utc>) -> Self {
        let blank = self.created_at.as_deref().map_or(true, |s| s.trim().is_empty());
        if blank {
            self.created_at = Some(format_timestamp(now));
        }
        self
    }

    /// Drop a blank `created_at` so a patch keeps the stored value
    pub fn without_blank_timestamp(mut self) -> Self {
        if self.created_at.as_deref().is_some_and(|s| s.trim().is_empty()) {
            self.created_at = None;
        }
        self
    }
}

impl Order {
    /// Build a document from a field set and a freshly assigned ID
    pub fn from_fields(id: String, fields: &OrderFields) -> Self {
        let mut order = Order {
            id,
            ..Default::default()
        };
        order.apply(fields);
        order
    }

    /// Overwrite every field with the given set (a `set` patch)
    pub fn apply(&mut self, fields: &OrderFields) {
        self.full_name = fields.full_name.clone();
        self.email = fields.email.clone();
        self.phone = fields.phone.clone();
        self.address = fields.address.clone();
        self.city = fields.city.clone();
        self.postal_code = fields.postal_code.clone();
        self.country = fields.country.clone();
        self.payment_method = fields.payment_method;
        self.payment_status = fields.payment_status;
        self.amount = fields.amount;
        if let Some(created_at) = &fields.created_at {
            self.created_at = created_at.clone();
        }
        self.cart_items = fields.cart_items.clone();
    }
}

impl Entity for Order {
    type Id = String;
    type Fields = OrderFields;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
