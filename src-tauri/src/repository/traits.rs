//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for document storage.
//! Implementations can use a hosted document store, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for document CRUD
///
/// Generic over any Entity type.
/// All operations are async to support remote backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// List every document of the entity's type
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Find a document by ID
    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// Create a document; the returned copy carries the assigned ID
    async fn create(&self, fields: &T::Fields) -> DomainResult<T>;

    /// Set the given fields on an existing document and return the result
    async fn patch(&self, id: &T::Id, fields: &T::Fields) -> DomainResult<T>;

    /// Delete a document by ID
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}
