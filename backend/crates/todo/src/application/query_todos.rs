//! Query Todos Use Case
//!
//! Read-only access: list all todos, fetch one by id.

use crate::domain::entities::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::TodoId;
use crate::error::{TodoError, TodoResult};
use std::sync::Arc;

/// Query Todos Use Case
pub struct QueryTodosUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> QueryTodosUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> TodoResult<Vec<Todo>> {
        let todos = self.repo.list().await?;
        tracing::debug!(count = todos.len(), "Listed todos");
        Ok(todos)
    }

    /// Fetch a single todo; absence is `TodoError::NotFound`
    pub async fn get(&self, id: TodoId) -> TodoResult<Todo> {
        self.repo.get(id).await?.ok_or(TodoError::NotFound(id))
    }
}
