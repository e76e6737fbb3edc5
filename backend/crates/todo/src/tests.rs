//! Unit tests for Todo crate

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use kernel::id::TodoId;

    #[test]
    fn test_default_config() {
        let config = TodoConfig::default();

        assert_eq!(config.docs_path, "/swagger");
        assert_eq!(config.location_prefix, "/todo");
    }

    #[test]
    fn test_location_for() {
        let config = TodoConfig::default();
        assert_eq!(config.location_for(TodoId::new(12)), "/todo/12");

        let config = TodoConfig {
            location_prefix: "/todo/".to_string(),
            ..TodoConfig::default()
        };
        assert_eq!(config.location_for(TodoId::new(3)), "/todo/3");
    }

    #[test]
    fn test_with_docs_path() {
        let config = TodoConfig::with_docs_path("/docs");
        assert_eq!(config.docs_path, "/docs");
        assert_eq!(config.location_prefix, "/todo");
    }
}

#[cfg(test)]
mod models_tests {
    use crate::domain::entities::Todo;
    use crate::domain::value_objects::{TodoId, TodoTitle};
    use crate::presentation::dto::*;

    #[test]
    fn test_todo_response_serialization() {
        let todo = Todo {
            id: TodoId::new(1),
            title: TodoTitle::new("buy milk").unwrap(),
            is_complete: false,
        };

        let json = serde_json::to_value(TodoResponse::from(todo)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "buy milk", "isComplete": false})
        );
    }

    #[test]
    fn test_create_request_defaults() {
        let request: CreateTodoRequest = serde_json::from_str(r#"{"title":"walk"}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("walk"));
        assert!(!request.is_complete);

        let request: CreateTodoRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());
    }

    #[test]
    fn test_create_request_ignores_id() {
        let request: CreateTodoRequest =
            serde_json::from_str(r#"{"id":99,"title":"walk","isComplete":true}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("walk"));
        assert!(request.is_complete);
    }

    #[test]
    fn test_update_request_deserialization() {
        let request: UpdateTodoRequest =
            serde_json::from_str(r#"{"id":4,"title":"walk","isComplete":true}"#).unwrap();
        assert_eq!(request.id, Some(TodoId::new(4)));
        assert!(request.is_complete);

        let request: UpdateTodoRequest = serde_json::from_str(r#"{"title":"walk"}"#).unwrap();
        assert!(request.id.is_none());
    }
}

#[cfg(test)]
mod domain_tests {
    use crate::domain::entities::*;
    use crate::domain::value_objects::*;
    use crate::error::TodoError;

    #[test]
    fn test_title_validation() {
        assert!(TodoTitle::new("x").is_ok());
        assert!(matches!(TodoTitle::new(""), Err(TodoError::MissingTitle)));
        assert!(matches!(
            TodoTitle::required(None),
            Err(TodoError::MissingTitle)
        ));
        assert_eq!(
            TodoTitle::required(Some("y".into())).unwrap().as_str(),
            "y"
        );
    }

    #[test]
    fn test_draft_into_todo() {
        let draft = TodoDraft::new(TodoTitle::new("read").unwrap(), true);
        let todo = draft.into_todo(TodoId::new(5));

        assert_eq!(todo.id, TodoId::new(5));
        assert_eq!(todo.title.as_str(), "read");
        assert!(todo.is_complete);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::kind::ErrorKind;
    use kernel::id::TodoId;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(TodoError, StatusCode)> = vec![
            (TodoError::NotFound(TodoId::new(1)), StatusCode::NOT_FOUND),
            (
                TodoError::IdMismatch {
                    path: TodoId::new(1),
                    body: Some(TodoId::new(2)),
                },
                StatusCode::BAD_REQUEST,
            ),
            (TodoError::MissingTitle, StatusCode::BAD_REQUEST),
            (
                TodoError::MalformedBody("eof".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                TodoError::InvalidPath("abc".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                TodoError::Database(sqlx::Error::PoolClosed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                TodoError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_kind_matches_status() {
        let err = TodoError::NotFound(TodoId::new(3));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.kind().status_code(), err.status_code().as_u16());

        let err = TodoError::MissingTitle;
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.kind().status_code(), err.status_code().as_u16());

        let err = TodoError::Database(sqlx::Error::PoolClosed);
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
    }

    #[test]
    fn test_transient_classification() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(TodoError::Database(sqlx::Error::Io(io)).is_transient());
        assert!(TodoError::Database(sqlx::Error::PoolTimedOut).is_transient());
        assert!(!TodoError::Database(sqlx::Error::RowNotFound).is_transient());
        assert!(!TodoError::MissingTitle.is_transient());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TodoError::NotFound(TodoId::new(7)).to_string(),
            "Todo 7 not found"
        );
        assert!(TodoError::MissingTitle.to_string().contains("Title"));
    }
}

#[cfg(test)]
mod use_case_tests {
    use crate::application::*;
    use crate::domain::repository::TodoRepository;
    use crate::domain::value_objects::TodoId;
    use crate::error::TodoError;
    use crate::infra::memory::InMemoryTodoRepository;
    use std::sync::Arc;

    async fn seeded(title: &str) -> (Arc<InMemoryTodoRepository>, TodoId) {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let todo = CreateTodoUseCase::new(repo.clone())
            .execute(CreateTodoInput {
                title: Some(title.to_string()),
                is_complete: false,
            })
            .await
            .unwrap();
        (repo, todo.id)
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (repo, id) = seeded("buy milk").await;

        let todo = QueryTodosUseCase::new(repo).get(id).await.unwrap();
        assert_eq!(todo.title.as_str(), "buy milk");
        assert!(!todo.is_complete);
    }

    #[tokio::test]
    async fn test_create_requires_title() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let result = CreateTodoUseCase::new(repo.clone())
            .execute(CreateTodoInput {
                title: None,
                is_complete: true,
            })
            .await;

        assert!(matches!(result, Err(TodoError::MissingTitle)));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_id_mismatch_checked_before_existence() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let result = UpdateTodoUseCase::new(repo)
            .execute(UpdateTodoInput {
                path_id: TodoId::new(40),
                body_id: Some(TodoId::new(41)),
                title: Some("x".into()),
                is_complete: false,
            })
            .await;

        assert!(matches!(result, Err(TodoError::IdMismatch { .. })));
    }

    #[tokio::test]
    async fn test_update_missing_body_id_is_mismatch() {
        let (repo, id) = seeded("a").await;
        let result = UpdateTodoUseCase::new(repo)
            .execute(UpdateTodoInput {
                path_id: id,
                body_id: None,
                title: Some("b".into()),
                is_complete: false,
            })
            .await;

        assert!(matches!(result, Err(TodoError::IdMismatch { body: None, .. })));
    }

    #[tokio::test]
    async fn test_update_persists_values() {
        let (repo, id) = seeded("a").await;
        UpdateTodoUseCase::new(repo.clone())
            .execute(UpdateTodoInput {
                path_id: id,
                body_id: Some(id),
                title: Some("b".into()),
                is_complete: true,
            })
            .await
            .unwrap();

        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.title.as_str(), "b");
        assert!(stored.is_complete);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (repo, id) = seeded("a").await;
        let use_case = DeleteTodoUseCase::new(repo.clone());

        use_case.execute(id).await.unwrap();
        assert!(matches!(
            use_case.execute(id).await,
            Err(TodoError::NotFound(_))
        ));
        assert!(matches!(
            QueryTodosUseCase::new(repo).get(id).await,
            Err(TodoError::NotFound(_))
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use crate::application::config::TodoConfig;
    use crate::infra::memory::InMemoryTodoRepository;
    use crate::presentation::dto::TodoResponse;
    use crate::presentation::router::todo_router_generic;
    use axum::Router;
    use axum::body::{Body, Bytes};
    use axum::http::{HeaderMap, Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        todo_router_generic(InMemoryTodoRepository::new(), TodoConfig::default())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, HeaderMap, Bytes) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, bytes)
    }

    async fn create(app: &Router, title: &str) -> TodoResponse {
        let (status, _, body) =
            send(app, Method::POST, "/todos", Some(json!({ "title": title }))).await;
        assert_eq!(status, StatusCode::CREATED);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_create_get_delete_walkthrough() {
        let app = app();

        let (status, headers, body) = send(
            &app,
            Method::POST,
            "/todos",
            Some(json!({ "title": "buy milk" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(headers[header::LOCATION], "/todo/1");
        let created: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            created,
            json!({ "id": 1, "title": "buy milk", "isComplete": false })
        );

        let (status, _, body) = send(&app, Method::GET, "/todos/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), created);

        let (status, _, _) = send(&app, Method::DELETE, "/todos/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, body) = send(&app, Method::GET, "/todos/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_all_created() {
        let app = app();

        let (status, _, body) = send(&app, Method::GET, "/todos", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));

        let mut created = Vec::new();
        for title in ["a", "b", "c"] {
            created.push(create(&app, title).await);
        }

        let (status, _, body) = send(&app, Method::GET, "/todos", None).await;
        assert_eq!(status, StatusCode::OK);
        let listed: Vec<TodoResponse> = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn test_create_with_is_complete() {
        let app = app();

        let (status, _, body) = send(
            &app,
            Method::POST,
            "/todos",
            Some(json!({ "title": "done already", "isComplete": true })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let todo: TodoResponse = serde_json::from_slice(&body).unwrap();
        assert!(todo.is_complete);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_or_empty_title() {
        let app = app();

        for body in [json!({}), json!({ "title": "" }), json!({ "title": null })] {
            let (status, _, response_body) =
                send(&app, Method::POST, "/todos", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(response_body.is_empty());
        }

        let (_, _, body) = send(&app, Method::GET, "/todos", None).await;
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let app = app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/todos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/todos")
            .body(Body::from(r#"{"title":"no content type"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_missing_and_invalid_id() {
        let app = app();

        let (status, _, _) = send(&app, Method::GET, "/todos/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = send(&app, Method::GET, "/todos/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_paths() {
        let app = app();
        let todo = create(&app, "old").await;
        let uri = format!("/todos/{}", todo.id);

        // body id differs from path id
        let (status, _, _) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({ "id": todo.id.get() + 1, "title": "new" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // body id missing
        let (status, _, _) = send(&app, Method::PUT, &uri, Some(json!({ "title": "new" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // nonexistent id
        let (status, _, _) = send(
            &app,
            Method::PUT,
            "/todos/999",
            Some(json!({ "id": 999, "title": "new" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // success
        let (status, _, body) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({ "id": todo.id.get(), "title": "new", "isComplete": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (_, _, body) = send(&app, Method::GET, &uri, None).await;
        let stored: TodoResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(stored.title, "new");
        assert!(stored.is_complete);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_not_found() {
        let app = app();
        let todo = create(&app, "temp").await;
        let uri = format!("/todos/{}", todo.id);

        let (status, _, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, _, body) = send(&app, Method::GET, "/todos", None).await;
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_unmatched_route_redirects_to_docs() {
        let app = app();

        let (status, headers, _) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(headers[header::LOCATION], "/swagger");

        let (status, headers, _) = send(&app, Method::GET, "/nope/deeper", None).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(headers[header::LOCATION], "/swagger");
    }

    #[tokio::test]
    async fn test_unsupported_method_redirects_to_docs() {
        let app = app();
        let todo = create(&app, "walk").await;
        let uri = format!("/todos/{}", todo.id);

        for (method, path) in [
            (Method::PATCH, "/todos"),
            (Method::DELETE, "/todos"),
            (Method::POST, uri.as_str()),
            (Method::POST, "/swagger"),
        ] {
            let (status, headers, _) = send(&app, method.clone(), path, None).await;
            assert_eq!(status, StatusCode::FOUND, "{method} {path}");
            assert_eq!(headers[header::LOCATION], "/swagger", "{method} {path}");
        }

        // the todo is untouched
        let (status, _, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_docs_endpoint_serves_openapi() {
        let app = app();

        let (status, _, body) = send(&app, Method::GET, "/swagger", None).await;
        assert_eq!(status, StatusCode::OK);
        let doc: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["openapi"], "3.0.3");
        assert!(doc["paths"]["/todos/{id}"]["put"].is_object());
    }

    #[tokio::test]
    async fn test_custom_docs_path() {
        let app = todo_router_generic(
            InMemoryTodoRepository::new(),
            TodoConfig::with_docs_path("/docs"),
        );

        let (status, headers, _) = send(&app, Method::GET, "/elsewhere", None).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(headers[header::LOCATION], "/docs");

        let (status, _, _) = send(&app, Method::GET, "/docs", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
