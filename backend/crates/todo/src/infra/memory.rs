//! In-Memory Repository Implementation
//!
//! Process-local storage with the same contract as the PostgreSQL gateway.
//! Ids start at 1 and are never reused.

use crate::domain::entities::{Todo, TodoDraft};
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::TodoId;
use crate::error::{TodoError, TodoResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory repository; clones share the same storage
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i32,
    todos: BTreeMap<TodoId, Todo>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.state.read().await.todos.len()
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        // BTreeMap iteration is ascending by id, i.e. insertion order
        Ok(self.state.read().await.todos.values().cloned().collect())
    }

    async fn get(&self, id: TodoId) -> TodoResult<Option<Todo>> {
        Ok(self.state.read().await.todos.get(&id).cloned())
    }

    async fn create(&self, draft: &TodoDraft) -> TodoResult<Todo> {
        let mut state = self.state.write().await;
        state.last_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| TodoError::Internal("todo id space exhausted".to_string()))?;

        let todo = draft.clone().into_todo(TodoId::new(state.last_id));
        state.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn replace(&self, id: TodoId, draft: &TodoDraft) -> TodoResult<()> {
        let mut state = self.state.write().await;
        let todo = state.todos.get_mut(&id).ok_or(TodoError::NotFound(id))?;
        todo.title = draft.title.clone();
        todo.is_complete = draft.is_complete;
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> TodoResult<()> {
        self.state
            .write()
            .await
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id))
    }
}
