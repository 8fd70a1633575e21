//! Persistence adapter for to-do items.
//!
//! Handlers only see `TodoStore`. `MongoStore` is the production backend;
//! `MemoryStore` keeps the same contract in process and backs the tests.

mod memory;
mod mongo;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::model::TodoItem;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn insert(&self, item: &TodoItem) -> Result<(), StoreError>;

    /// Every stored item, in backend order.
    async fn list(&self) -> Result<Vec<TodoItem>, StoreError>;

    /// Removes the item with `id`, returning how many documents were deleted (0 or 1).
    async fn delete(&self, id: Uuid) -> Result<u64, StoreError>;
}
