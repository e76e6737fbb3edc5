//! Create Todo Use Case

use crate::domain::entities::{Todo, TodoDraft};
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::TodoTitle;
use crate::error::TodoResult;
use std::sync::Arc;

/// Input DTO for create todo
#[derive(Debug, Clone)]
pub struct CreateTodoInput {
    pub title: Option<String>,
    pub is_complete: bool,
}

/// Create Todo Use Case
pub struct CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateTodoInput) -> TodoResult<Todo> {
        let title = TodoTitle::required(input.title)?;
        let draft = TodoDraft::new(title, input.is_complete);

        let todo = self.repo.create(&draft).await?;

        tracing::info!(todo_id = %todo.id, "Todo created");

        Ok(todo)
    }
}
