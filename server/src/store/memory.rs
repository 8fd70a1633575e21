use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TodoStore};
use crate::model::TodoItem;

/// In-process store. Listing order is unspecified, as with the database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<Uuid, TodoItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn insert(&self, item: &TodoItem) -> Result<(), StoreError> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<TodoItem>, StoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let removed = self.items.write().await.remove(&id);
        Ok(removed.map_or(0, |_| 1))
    }
}
