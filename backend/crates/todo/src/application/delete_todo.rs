//! Delete Todo Use Case

use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::TodoId;
use crate::error::TodoResult;
use std::sync::Arc;

/// Delete Todo Use Case
pub struct DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: TodoId) -> TodoResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(todo_id = %id, "Todo deleted");
        Ok(())
    }
}
