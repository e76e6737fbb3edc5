//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Error classification shared by every crate
//! - Typed integer IDs for persisted records
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    #[cfg(feature = "sqlx")]
    pub mod conversions;
    pub mod kind;
}
pub mod id;
