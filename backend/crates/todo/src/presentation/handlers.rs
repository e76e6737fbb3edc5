//! HTTP Handlers
//!
//! Extractor rejections are taken as `Result` so malformed paths and bodies
//! surface as `TodoError` (400, empty body) instead of axum's default text.

use crate::application::config::TodoConfig;
use crate::application::{
    CreateTodoInput, CreateTodoUseCase, DeleteTodoUseCase, QueryTodosUseCase, UpdateTodoInput,
    UpdateTodoUseCase,
};
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::TodoId;
use crate::error::TodoResult;
use crate::presentation::dto::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

/// Shared state for todo handlers
#[derive(Clone)]
pub struct TodoAppState<R>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<TodoConfig>,
}

/// GET /todos
pub async fn list_todos<R>(
    State(state): State<TodoAppState<R>>,
) -> TodoResult<Json<Vec<TodoResponse>>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryTodosUseCase::new(state.repo.clone());

    let todos = use_case.list().await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// GET /todos/{id}
pub async fn get_todo<R>(
    State(state): State<TodoAppState<R>>,
    path: Result<Path<TodoId>, PathRejection>,
) -> TodoResult<Json<TodoResponse>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = path?;

    let use_case = QueryTodosUseCase::new(state.repo.clone());

    let todo = use_case.get(id).await?;

    Ok(Json(todo.into()))
}

/// POST /todos
pub async fn create_todo<R>(
    State(state): State<TodoAppState<R>>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> TodoResult<impl IntoResponse>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = CreateTodoUseCase::new(state.repo.clone());

    let input = CreateTodoInput {
        title: req.title,
        is_complete: req.is_complete,
    };

    let todo = use_case.execute(input).await?;

    let location = state.config.location_for(todo.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoResponse::from(todo)),
    ))
}

/// PUT /todos/{id}
pub async fn update_todo<R>(
    State(state): State<TodoAppState<R>>,
    path: Result<Path<TodoId>, PathRejection>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> TodoResult<StatusCode>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = path?;
    let Json(req) = body?;

    let use_case = UpdateTodoUseCase::new(state.repo.clone());

    let input = UpdateTodoInput {
        path_id: id,
        body_id: req.id,
        title: req.title,
        is_complete: req.is_complete,
    };

    use_case.execute(input).await?;

    Ok(StatusCode::OK)
}

/// DELETE /todos/{id}
pub async fn delete_todo<R>(
    State(state): State<TodoAppState<R>>,
    path: Result<Path<TodoId>, PathRejection>,
) -> TodoResult<StatusCode>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = path?;

    let use_case = DeleteTodoUseCase::new(state.repo.clone());

    use_case.execute(id).await?;

    Ok(StatusCode::OK)
}

/// Fallback for every unmatched route
pub async fn redirect_to_docs<R>(State(state): State<TodoAppState<R>>) -> impl IntoResponse
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.config.docs_path.clone())],
    )
}
