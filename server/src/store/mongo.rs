use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{StoreError, TodoStore};
use crate::model::TodoItem;

pub const DATABASE_NAME: &str = "todolist";
pub const COLLECTION_NAME: &str = "todos";

/// On-disk layout: `_id` is a standard (binary subtype 4) UUID.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: bson::Uuid,
    content: String,
}

impl From<&TodoItem> for TodoDocument {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: bson::Uuid::from_uuid_1(item.id),
            content: item.content.clone(),
        }
    }
}

impl From<TodoDocument> for TodoItem {
    fn from(doc: TodoDocument) -> Self {
        Self {
            id: doc.id.to_uuid_1(),
            content: doc.content,
        }
    }
}

/// MongoDB-backed store. The driver pools connections internally, so one
/// instance is shared by every request.
#[derive(Clone, Debug)]
pub struct MongoStore {
    todos: Collection<TodoDocument>,
}

impl MongoStore {
    pub async fn connect(connection_string: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(connection_string).await?;
        tracing::info!(database = DATABASE_NAME, collection = COLLECTION_NAME, "mongodb client ready");
        Ok(Self::from_client(&client))
    }

    pub fn from_client(client: &Client) -> Self {
        let todos = client.database(DATABASE_NAME).collection(COLLECTION_NAME);
        Self { todos }
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn insert(&self, item: &TodoItem) -> Result<(), StoreError> {
        self.todos.insert_one(TodoDocument::from(item), None).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<TodoItem>, StoreError> {
        let cursor = self.todos.find(None, None).await?;
        let docs: Vec<TodoDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(TodoItem::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = self
            .todos
            .delete_one(doc! { "_id": bson::Uuid::from_uuid_1(id) }, None)
            .await?;
        Ok(result.deleted_count)
    }
}
