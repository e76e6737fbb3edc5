//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod create_todo;
pub mod delete_todo;
pub mod query_todos;
pub mod update_todo;

pub use create_todo::{CreateTodoInput, CreateTodoUseCase};
pub use delete_todo::DeleteTodoUseCase;
pub use query_todos::QueryTodosUseCase;
pub use update_todo::{UpdateTodoInput, UpdateTodoUseCase};
