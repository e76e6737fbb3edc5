//! Presentation Layer
//!
//! HTTP handlers and DTOs for the API.

pub mod docs;
pub mod dto;
pub mod handlers;
pub mod router;
