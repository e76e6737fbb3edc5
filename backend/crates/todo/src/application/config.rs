//! Application Configuration
//!
//! Configuration for the Todo application layer.

use kernel::id::TodoId;

/// Todo application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Path serving the API description; unmatched routes redirect here
    pub docs_path: String,
    /// Prefix of the `Location` header returned on create
    pub location_prefix: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            docs_path: "/swagger".to_string(),
            location_prefix: "/todo".to_string(),
        }
    }
}

impl TodoConfig {
    pub fn with_docs_path(docs_path: impl Into<String>) -> Self {
        Self {
            docs_path: docs_path.into(),
            ..Default::default()
        }
    }

    /// `Location` header value for a newly created todo
    pub fn location_for(&self, id: TodoId) -> String {
        format!("{}/{}", self.location_prefix.trim_end_matches('/'), id)
    }
}
