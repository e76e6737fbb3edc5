//! API DTOs (Data Transfer Objects)

use crate::domain::entities::Todo;
use kernel::id::TodoId;
use serde::{Deserialize, Serialize};

/// Todo as returned by GET /todos, GET /todos/{id} and POST /todos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: TodoId,
    pub title: String,
    pub is_complete: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.into_inner(),
            is_complete: todo.is_complete,
        }
    }
}

/// Request for POST /todos
///
/// Any `id` in the body is ignored; the store assigns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

/// Request for PUT /todos/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub id: Option<TodoId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}
