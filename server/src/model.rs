//! Request and response schemas for the `/todos` endpoints.
//!
//! `TodoItem` is the stored record and the response shape. `CreateTodo` is the
//! only accepted request body; `content` is required and must be a string.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DELETED_MESSAGE: &str = "Todo deleted successfully";

/// A single to-do record. The id is always generated server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub content: String,
}

impl TodoItem {
    pub fn new(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn deleted() -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
        }
    }
}
