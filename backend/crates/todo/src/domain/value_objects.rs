//! Domain Value Objects
//!
//! Immutable value types for the Todo domain.

use crate::error::{TodoError, TodoResult};
use std::fmt;

pub use kernel::id::TodoId;

/// Todo title - required, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(title: impl Into<String>) -> TodoResult<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(TodoError::MissingTitle);
        }
        Ok(Self(title))
    }

    /// Validate an optional title taken from a request body
    pub fn required(title: Option<String>) -> TodoResult<Self> {
        title.map_or(Err(TodoError::MissingTitle), Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
