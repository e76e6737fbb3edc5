//! Domain Entities
//!
//! Core business entities for the Todo domain.

use crate::domain::value_objects::{TodoId, TodoTitle};

/// Todo entity - a persisted record with a store-assigned id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: TodoTitle,
    pub is_complete: bool,
}

/// The caller-controlled part of a todo
///
/// Used both to create a new row and to overwrite an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: TodoTitle,
    pub is_complete: bool,
}

impl TodoDraft {
    pub fn new(title: TodoTitle, is_complete: bool) -> Self {
        Self { title, is_complete }
    }

    /// Attach a store-assigned id
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            is_complete: self.is_complete,
        }
    }
}
