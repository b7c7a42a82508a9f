//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Payment method (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CreditCard, PaymentMethod::Cash];

    /// Option value, same as the stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "creditCard",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Cash => "Cash",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cash" => PaymentMethod::Cash,
            _ => PaymentMethod::CreditCard,
        }
    }
}

/// Payment status (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "paid")]
    Paid,
    #[serde(rename = "cash on delivery")]
    CashOnDelivery,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 2] = [PaymentStatus::Paid, PaymentStatus::CashOnDelivery];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::CashOnDelivery => "cash on delivery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::CashOnDelivery => "Cash on Delivery",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cash on delivery" => PaymentStatus::CashOnDelivery,
            _ => PaymentStatus::Paid,
        }
    }
}

/// Order data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
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
    pub created_at: String,
    pub cart_items: Vec<String>,
}

/// Field set sent on create and update (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
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
