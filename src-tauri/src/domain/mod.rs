//! Domain Layer
//!
//! Contains the order document and core abstractions.
//! This layer has NO external dependencies (except serde and chrono).

mod entity;
pub mod order;

pub use entity::{Entity, DomainError, DomainResult};
pub use order::{Order, OrderFields, ORDER_TYPE};
