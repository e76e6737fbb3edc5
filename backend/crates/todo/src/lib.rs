//! Todo Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Handlers are generic over [`domain::repository::TodoRepository`], so the
//! PostgreSQL gateway can be swapped for the in-memory one in tests.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TodoConfig;
pub use error::{TodoError, TodoResult};
pub use infra::memory::InMemoryTodoRepository;
pub use infra::postgres::PgTodoRepository;
pub use presentation::router::{todo_router, todo_router_generic};

// Re-export the shared error classification
pub use kernel::error::kind::ErrorKind;

#[cfg(test)]
mod tests;
