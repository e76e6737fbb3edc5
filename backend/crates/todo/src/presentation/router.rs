//! Todo Router

use crate::application::config::TodoConfig;
use crate::domain::repository::TodoRepository;
use crate::infra::postgres::PgTodoRepository;
use crate::presentation::docs;
use crate::presentation::handlers::{self, TodoAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the Todo router with PostgreSQL repository
pub fn todo_router(repo: PgTodoRepository, config: TodoConfig) -> Router {
    todo_router_generic(repo, config)
}

/// Create a generic Todo router for any repository implementation
///
/// Unmatched paths and unsupported methods on known paths redirect to
/// `config.docs_path`.
pub fn todo_router_generic<R>(repo: R, config: TodoConfig) -> Router
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let docs_path = config.docs_path.clone();

    let state = TodoAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos::<R>).post(handlers::create_todo::<R>),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo::<R>)
                .put(handlers::update_todo::<R>)
                .delete(handlers::delete_todo::<R>),
        )
        .route(&docs_path, get(docs::openapi_document))
        .fallback(handlers::redirect_to_docs::<R>)
        .method_not_allowed_fallback(handlers::redirect_to_docs::<R>)
        .with_state(state)
}
