//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entities::{Todo, TodoDraft};
use crate::domain::value_objects::TodoId;
use crate::error::TodoResult;

/// Todo repository trait
#[trait_variant::make(TodoRepository: Send)]
pub trait LocalTodoRepository {
    /// All todos in insertion order (ascending id)
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// Get todo by ID, `None` if absent
    async fn get(&self, id: TodoId) -> TodoResult<Option<Todo>>;

    /// Persist a new todo and return it with its assigned id
    async fn create(&self, draft: &TodoDraft) -> TodoResult<Todo>;

    /// Overwrite title and completion flag
    /// Fails with `TodoError::NotFound` if no row has `id`
    async fn replace(&self, id: TodoId, draft: &TodoDraft) -> TodoResult<()>;

    /// Delete a todo
    /// Fails with `TodoError::NotFound` if no row has `id`
    async fn delete(&self, id: TodoId) -> TodoResult<()>;
}
