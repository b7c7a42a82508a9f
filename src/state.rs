//! Admin View State
//!
//! The whole page state as one value plus a pure transition per user action.
//! Store calls happen outside; their results come back in as events.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use reactive_stores::Store;

use crate::models::{Order, OrderFields, PaymentMethod, PaymentStatus};

/// Value format of `<input type="datetime-local" step="1">`
const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M:%S";
const DATETIME_LOCAL_MINUTES: &str = "%Y-%m-%dT%H:%M";

/// Split the cart items text on commas, trimming each element.
/// Blank text yields no items.
pub fn split_cart_items(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(|item| item.trim().to_string()).collect()
}

pub fn join_cart_items(items: &[String]) -> String {
    items.join(", ")
}

/// Stored ISO-8601 timestamp -> datetime-local input value (UTC)
pub fn to_datetime_local(stored: &str) -> String {
    match DateTime::parse_from_rfc3339(stored) {
        Ok(at) => at.with_timezone(&Utc).format(DATETIME_LOCAL).to_string(),
        Err(_) => stored.to_string(),
    }
}

/// datetime-local input value (read as UTC) -> stored timestamp; blank means omitted
pub fn from_datetime_local(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let parsed = NaiveDateTime::parse_from_str(value, DATETIME_LOCAL)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_MINUTES));
    match parsed {
        Ok(naive) => Some(naive.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true)),
        Err(_) => Some(value.to_string()),
    }
}

/// What the form is doing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    /// Form hidden
    #[default]
    Viewing,
    Creating,
    /// Editing the order with this ID
    Editing(String),
}

/// Form inputs, one per order field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Phone,
    Address,
    City,
    PostalCode,
    Country,
    PaymentMethod,
    PaymentStatus,
    Amount,
    CreatedAt,
    CartItems,
}

/// Typed form state mirroring `Order`
///
/// Cart items stay as raw comma-joined text until submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderDraft {
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
    /// datetime-local value; empty means "now" on create
    pub created_at: String,
    pub cart_items_text: String,
    /// `createdAt` exactly as stored, sent back untouched unless the input changed
    pub stored_created_at: String,
}

impl OrderDraft {
    pub fn from_order(order: &Order) -> Self {
        Self {
            full_name: order.full_name.clone(),
            email: order.email.clone(),
            phone: order.phone.clone(),
            address: order.address.clone(),
            city: order.city.clone(),
            postal_code: order.postal_code.clone(),
            country: order.country.clone(),
            payment_method: order.payment_method,
            payment_status: order.payment_status,
            amount: order.amount,
            created_at: to_datetime_local(&order.created_at),
            cart_items_text: join_cart_items(&order.cart_items),
            stored_created_at: order.created_at.clone(),
        }
    }

    /// Store a raw input value into the matching field
    pub fn set(&mut self, field: FormField, raw: String) {
        match field {
            FormField::FullName => self.full_name = raw,
            FormField::Email => self.email = raw,
            FormField::Phone => self.phone = raw,
            FormField::Address => self.address = raw,
            FormField::City => self.city = raw,
            FormField::PostalCode => self.postal_code = raw,
            FormField::Country => self.country = raw,
            FormField::PaymentMethod => self.payment_method = PaymentMethod::from_str(&raw),
            FormField::PaymentStatus => self.payment_status = PaymentStatus::from_str(&raw),
            FormField::Amount => self.amount = raw.trim().parse().unwrap_or(0.0),
            FormField::CreatedAt => self.created_at = raw,
            FormField::CartItems => self.cart_items_text = raw,
        }
    }

    /// Current input value for a field
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::FullName => self.full_name.clone(),
            FormField::Email => self.email.clone(),
            FormField::Phone => self.phone.clone(),
            FormField::Address => self.address.clone(),
            FormField::City => self.city.clone(),
            FormField::PostalCode => self.postal_code.clone(),
            FormField::Country => self.country.clone(),
            FormField::PaymentMethod => self.payment_method.as_str().to_string(),
            FormField::PaymentStatus => self.payment_status.as_str().to_string(),
            FormField::Amount => self.amount.to_string(),
            FormField::CreatedAt => self.created_at.clone(),
            FormField::CartItems => self.cart_items_text.clone(),
        }
    }

    /// Field set to send to the store
    pub fn to_fields(&self) -> OrderFields {
        OrderFields {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            amount: self.amount,
            created_at: self.created_at_to_send(),
            cart_items: split_cart_items(&self.cart_items_text),
        }
    }

    fn created_at_to_send(&self) -> Option<String> {
        let untouched = !self.stored_created_at.is_empty()
            && self.created_at == to_datetime_local(&self.stored_created_at);
        if untouched {
            Some(self.stored_created_at.clone())
        } else {
            from_datetime_local(&self.created_at)
        }
    }
}

/// User actions and store results
#[derive(Debug, Clone, PartialEq)]
pub enum AdminEvent {
    /// Fetch-all succeeded
    Loaded(Vec<Order>),
    BeginCreate,
    /// Edit the current list entry with this ID
    BeginEdit(String),
    Cancel,
    FieldChanged(FormField, String),
    /// Store confirmed a create
    Created(Order),
    /// Store confirmed an update
    Updated(Order),
    /// Delete clicked; waiting for Yes/No
    RequestDelete(String),
    /// "No" on the delete confirmation
    DeclineDelete,
    /// Store confirmed a delete
    Deleted(String),
}

/// Store call implied by submitting the form
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(OrderFields),
    Update { id: String, fields: OrderFields },
}

/// Page state: the order list, the form mode and the draft
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct AdminState {
    pub orders: Vec<Order>,
    pub mode: Mode,
    pub draft: OrderDraft,
    /// Order whose delete confirmation is showing
    pub pending_delete: Option<String>,
}

impl AdminState {
    pub fn apply(mut self, event: AdminEvent) -> Self {
        match event {
            AdminEvent::Loaded(orders) => self.orders = orders,
            AdminEvent::BeginCreate => {
                self.mode = Mode::Creating;
                self.draft = OrderDraft::default();
            }
            AdminEvent::BeginEdit(id) => {
                if let Some(draft) = self.order(&id).map(OrderDraft::from_order) {
                    self.draft = draft;
                    self.mode = Mode::Editing(id);
                }
            }
            AdminEvent::Cancel => self.close_form(),
            AdminEvent::FieldChanged(field, raw) => self.draft.set(field, raw),
            AdminEvent::Created(order) => {
                self.orders.push(order);
                if self.mode == Mode::Creating {
                    self.close_form();
                }
            }
            AdminEvent::Updated(order) => {
                let editing_this = self.is_editing(&order.id);
                if let Some(slot) = self.orders.iter_mut().find(|o| o.id == order.id) {
                    *slot = order;
                }
                if editing_this {
                    self.close_form();
                }
            }
            AdminEvent::RequestDelete(id) => self.pending_delete = Some(id),
            AdminEvent::DeclineDelete => self.pending_delete = None,
            AdminEvent::Deleted(id) => {
                self.orders.retain(|o| o.id != id);
                if self.pending_delete.as_deref() == Some(id.as_str()) {
                    self.pending_delete = None;
                }
            }
        }
        self
    }

    /// Fold a create/update result back in. A failure changes nothing.
    pub fn settle(self, submitted: &Submission, result: Result<Order, String>) -> Self {
        match (submitted, result) {
            (Submission::Create(_), Ok(order)) => self.apply(AdminEvent::Created(order)),
            (Submission::Update { .. }, Ok(order)) => self.apply(AdminEvent::Updated(order)),
            (_, Err(_)) => self,
        }
    }

    /// The confirmed delete target, if a confirmation is showing
    pub fn take_pending_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn is_editing(&self, id: &str) -> bool {
        matches!(&self.mode, Mode::Editing(current) if current == id)
    }

    pub fn form_open(&self) -> bool {
        self.mode != Mode::Viewing
    }

    pub fn submission(&self) -> Option<Submission> {
        match &self.mode {
            Mode::Viewing => None,
            Mode::Creating => Some(Submission::Create(self.draft.to_fields())),
            Mode::Editing(id) => Some(Submission::Update {
                id: id.clone(),
                fields: self.draft.to_fields(),
            }),
        }
    }

    fn close_form(&mut self) {
        self.mode = Mode::Viewing;
        self.draft = OrderDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, name: &str, items: &[&str]) -> Order {
        Order {
            id: id.to_string(),
            full_name: name.to_string(),
            email: format!("{}@example.com", id),
            amount: 20.0,
            created_at: "2024-05-01T09:30:15.000Z".to_string(),
            cart_items: items.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn loaded() -> AdminState {
        AdminState::default().apply(AdminEvent::Loaded(vec![
            order("a", "Ada", &["A"]),
            order("b", "Grace", &["B", "C"]),
            order("c", "Linus", &[]),
        ]))
    }

    #[test]
    fn test_split_cart_items() {
        assert_eq!(split_cart_items("A, B ,C"), vec!["A", "B", "C"]);
        assert_eq!(split_cart_items("Lamp"), vec!["Lamp"]);
        assert_eq!(split_cart_items("A,,B"), vec!["A", "", "B"]);
        assert!(split_cart_items("").is_empty());
        assert!(split_cart_items("   ").is_empty());
    }

    #[test]
    fn test_edit_prefills_joined_items_and_round_trips() {
        let state = loaded()
            .apply(AdminEvent::Created(order("x", "X", &["A", "B", "C"])))
            .apply(AdminEvent::BeginEdit("x".into()));
        assert_eq!(state.draft.cart_items_text, "A, B, C");

        match state.submission() {
            Some(Submission::Update { id, fields }) => {
                assert_eq!(id, "x");
                assert_eq!(fields.cart_items, vec!["A", "B", "C"]);
                assert_eq!(fields.created_at.as_deref(), Some("2024-05-01T09:30:15.000Z"));
            }
            other => panic!("expected update submission, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_after_update_uses_current_entry() {
        let mut saved = order("a", "Ada", &["X", "Y"]);
        saved.address = "New St".to_string();
        saved.payment_status = PaymentStatus::CashOnDelivery;

        let state = loaded()
            .apply(AdminEvent::BeginEdit("a".into()))
            .apply(AdminEvent::Updated(saved))
            .apply(AdminEvent::BeginEdit("a".into()));

        assert_eq!(state.draft.cart_items_text, "X, Y");
        assert_eq!(state.draft.address, "New St");
        let Some(Submission::Update { fields, .. }) = state.submission() else {
            panic!("expected update submission");
        };
        assert_eq!(fields.cart_items, vec!["X", "Y"]);
        assert_eq!(fields.payment_status, PaymentStatus::CashOnDelivery);
    }

    #[test]
    fn test_edit_unknown_id_is_ignored() {
        let before = loaded();
        assert_eq!(before.clone().apply(AdminEvent::BeginEdit("zzz".into())), before);
    }

    #[test]
    fn test_untouched_created_at_is_sent_verbatim() {
        let mut stored = order("s", "Sam", &[]);
        stored.created_at = "2024-05-01T09:30:15Z".to_string();
        let state = AdminState::default()
            .apply(AdminEvent::Loaded(vec![stored]))
            .apply(AdminEvent::BeginEdit("s".into()));

        let Some(Submission::Update { fields, .. }) = state.submission() else {
            panic!("expected update submission");
        };
        assert_eq!(fields.created_at.as_deref(), Some("2024-05-01T09:30:15Z"));

        let changed = state.apply(AdminEvent::FieldChanged(FormField::CreatedAt, "2024-06-02T08:00:00".into()));
        let Some(Submission::Update { fields, .. }) = changed.submission() else {
            panic!("expected update submission");
        };
        assert_eq!(fields.created_at.as_deref(), Some("2024-06-02T08:00:00.000Z"));
    }

    #[test]
    fn test_create_submission_converts_cart_text() {
        let state = loaded()
            .apply(AdminEvent::BeginCreate)
            .apply(AdminEvent::FieldChanged(FormField::FullName, "Ada".into()))
            .apply(AdminEvent::FieldChanged(FormField::CartItems, " Lamp , Desk,Chair ".into()))
            .apply(AdminEvent::FieldChanged(FormField::Amount, "12.5".into()))
            .apply(AdminEvent::FieldChanged(FormField::PaymentMethod, "cash".into()))
            .apply(AdminEvent::FieldChanged(FormField::PaymentStatus, "cash on delivery".into()));

        let Some(Submission::Create(fields)) = state.submission() else {
            panic!("expected create submission");
        };
        assert_eq!(fields.full_name, "Ada");
        assert_eq!(fields.cart_items, vec!["Lamp", "Desk", "Chair"]);
        assert_eq!(fields.amount, 12.5);
        assert_eq!(fields.payment_method, PaymentMethod::Cash);
        assert_eq!(fields.payment_status, PaymentStatus::CashOnDelivery);
        assert_eq!(fields.created_at, None);
    }

    #[test]
    fn test_empty_cart_text_submits_no_items() {
        let state = AdminState::default().apply(AdminEvent::BeginCreate);
        let Some(Submission::Create(fields)) = state.submission() else {
            panic!("expected create submission");
        };
        assert!(fields.cart_items.is_empty());
    }

    #[test]
    fn test_viewing_has_no_submission() {
        assert_eq!(loaded().submission(), None);
        assert!(!loaded().form_open());
    }

    #[test]
    fn test_modes_are_exclusive() {
        let editing = loaded().apply(AdminEvent::BeginEdit("a".into()));
        assert_eq!(editing.mode, Mode::Editing("a".into()));

        let creating = editing.apply(AdminEvent::BeginCreate);
        assert_eq!(creating.mode, Mode::Creating);
        assert_eq!(creating.draft, OrderDraft::default());

        let cancelled = creating
            .apply(AdminEvent::FieldChanged(FormField::City, "Oslo".into()))
            .apply(AdminEvent::Cancel);
        assert_eq!(cancelled.mode, Mode::Viewing);
        assert_eq!(cancelled.draft, OrderDraft::default());
    }

    #[test]
    fn test_created_appends_and_closes_form() {
        let state = loaded()
            .apply(AdminEvent::BeginCreate)
            .apply(AdminEvent::Created(order("d", "New", &["Z"])));

        let ids: Vec<_> = state.orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(state.mode, Mode::Viewing);
    }

    #[test]
    fn test_updated_replaces_only_matching_entry() {
        let before = loaded().apply(AdminEvent::BeginEdit("b".into()));
        let after = before
            .clone()
            .apply(AdminEvent::Updated(order("b", "Grace Hopper", &["D"])));

        assert_eq!(after.orders.len(), 3);
        assert_eq!(after.orders[0], before.orders[0]);
        assert_eq!(after.orders[1].full_name, "Grace Hopper");
        assert_eq!(after.orders[1].cart_items, vec!["D"]);
        assert_eq!(after.orders[2], before.orders[2]);
        assert_eq!(after.mode, Mode::Viewing);
    }

    #[test]
    fn test_updated_for_other_order_keeps_form_open() {
        let state = loaded()
            .apply(AdminEvent::BeginEdit("a".into()))
            .apply(AdminEvent::Updated(order("c", "Linus T", &[])));
        assert_eq!(state.mode, Mode::Editing("a".into()));
        assert_eq!(state.orders[2].full_name, "Linus T");
    }

    #[test]
    fn test_failed_update_leaves_state_untouched() {
        let editing = loaded()
            .apply(AdminEvent::BeginEdit("b".into()))
            .apply(AdminEvent::FieldChanged(FormField::FullName, "Unsaved".into()));
        let snapshot = editing.clone();
        let submitted = editing.submission().expect("form is open");

        let after = editing.settle(&submitted, Err("HTTP 500".to_string()));

        assert_eq!(after, snapshot);
        assert_eq!(after.mode, Mode::Editing("b".into()));
        assert_eq!(after.draft.full_name, "Unsaved");
    }

    #[test]
    fn test_failed_create_keeps_form_and_list() {
        let creating = loaded()
            .apply(AdminEvent::BeginCreate)
            .apply(AdminEvent::FieldChanged(FormField::FullName, "Draft".into()));
        let snapshot = creating.clone();
        let submitted = creating.submission().expect("form is open");

        assert_eq!(creating.settle(&submitted, Err("offline".to_string())), snapshot);
    }

    #[test]
    fn test_settled_update_replaces_and_closes() {
        let editing = loaded()
            .apply(AdminEvent::BeginEdit("b".into()))
            .apply(AdminEvent::FieldChanged(FormField::FullName, "Grace H".into()));
        let submitted = editing.submission().expect("form is open");

        let after = editing.settle(&submitted, Ok(order("b", "Grace H", &["B", "C"])));

        assert_eq!(after.orders[1].full_name, "Grace H");
        assert_eq!(after.mode, Mode::Viewing);
    }

    #[test]
    fn test_declined_delete_issues_no_call() {
        let before = loaded();
        let mut after = before
            .clone()
            .apply(AdminEvent::RequestDelete("b".into()))
            .apply(AdminEvent::DeclineDelete);

        assert_eq!(after.take_pending_delete(), None);
        assert_eq!(after, before);
    }

    #[test]
    fn test_confirmed_delete_targets_requested_order() {
        let mut state = loaded().apply(AdminEvent::RequestDelete("b".into()));
        assert_eq!(state.pending_delete.as_deref(), Some("b"));

        assert_eq!(state.take_pending_delete().as_deref(), Some("b"));
        assert_eq!(state.take_pending_delete(), None);
        // the list only changes once the store confirms
        assert_eq!(state.orders.len(), 3);
    }

    #[test]
    fn test_deleted_removes_exactly_one() {
        let before = loaded();
        let after = before.clone().apply(AdminEvent::Deleted("b".into()));

        assert_eq!(after.orders, vec![before.orders[0].clone(), before.orders[2].clone()]);

        let unknown = before.clone().apply(AdminEvent::Deleted("zzz".into()));
        assert_eq!(unknown, before);
    }

    #[test]
    fn test_deleted_while_editing_keeps_form() {
        let state = loaded()
            .apply(AdminEvent::BeginEdit("b".into()))
            .apply(AdminEvent::Deleted("b".into()));

        assert_eq!(state.orders.len(), 2);
        assert_eq!(state.mode, Mode::Editing("b".into()));
        assert_eq!(state.draft.full_name, "Grace");
    }

    #[test]
    fn test_loaded_replaces_list() {
        let state = loaded().apply(AdminEvent::Loaded(vec![order("z", "Zed", &[])]));
        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.orders[0].id, "z");
    }

    #[test]
    fn test_amount_parsing() {
        let mut draft = OrderDraft::default();
        draft.set(FormField::Amount, "19.99".into());
        assert_eq!(draft.amount, 19.99);
        draft.set(FormField::Amount, "".into());
        assert_eq!(draft.amount, 0.0);
        assert_eq!(draft.value(FormField::Amount), "0");
    }

    #[test]
    fn test_datetime_local_conversion() {
        assert_eq!(to_datetime_local("2024-05-01T09:30:15.000Z"), "2024-05-01T09:30:15");
        assert_eq!(to_datetime_local("2024-05-01T11:30:15+02:00"), "2024-05-01T09:30:15");
        assert_eq!(from_datetime_local("2024-05-01T09:30").as_deref(), Some("2024-05-01T09:30:00.000Z"));
        assert_eq!(from_datetime_local(""), None);
    }
}
