//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Bounded retry with exponential backoff for startup connectivity

pub mod retry;
