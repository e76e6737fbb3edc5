//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Todo, TodoDraft)
//! - Domain value objects (TodoTitle)
//! - Repository trait (interface)

pub mod entities;
pub mod repository;
pub mod value_objects;
