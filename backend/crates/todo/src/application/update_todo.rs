//! Update Todo Use Case
//!
//! Full replace of an existing todo. The id in the body must match the
//! id in the path.

use crate::domain::entities::TodoDraft;
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::{TodoId, TodoTitle};
use crate::error::{TodoError, TodoResult};
use std::sync::Arc;

/// Input DTO for update todo
#[derive(Debug, Clone)]
pub struct UpdateTodoInput {
    pub path_id: TodoId,
    pub body_id: Option<TodoId>,
    pub title: Option<String>,
    pub is_complete: bool,
}

/// Update Todo Use Case
pub struct UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateTodoInput) -> TodoResult<()> {
        if input.body_id != Some(input.path_id) {
            return Err(TodoError::IdMismatch {
                path: input.path_id,
                body: input.body_id,
            });
        }

        let title = TodoTitle::required(input.title)?;
        let draft = TodoDraft::new(title, input.is_complete);

        self.repo.replace(input.path_id, &draft).await?;

        tracing::info!(todo_id = %input.path_id, "Todo updated");

        Ok(())
    }
}
