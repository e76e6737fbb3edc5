//! PostgreSQL Repository Implementation

use crate::domain::entities::{Todo, TodoDraft};
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::{TodoId, TodoTitle};
use crate::error::{TodoError, TodoResult};
use sqlx::PgPool;
use sqlx::migrate::Migrator;

/// Embedded schema migrations (`database/migrations` at the repository root)
pub static MIGRATOR: Migrator = sqlx::migrate!("../../../database/migrations");

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bring the schema up to date
    ///
    /// Idempotent: already-applied migrations are skipped, so calling this
    /// on every start (or from the `migrate` command) is safe.
    pub async fn ensure_schema(&self) -> TodoResult<()> {
        MIGRATOR.run(&self.pool).await?;

        tracing::info!(
            migrations = MIGRATOR.iter().count(),
            "Todo schema is up to date"
        );

        Ok(())
    }
}

impl TodoRepository for PgTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, is_complete
            FROM todos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TodoRow::into_todo).collect()
    }

    async fn get(&self, id: TodoId) -> TodoResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, is_complete
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TodoRow::into_todo).transpose()
    }

    async fn create(&self, draft: &TodoDraft) -> TodoResult<Todo> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, is_complete)
            VALUES ($1, $2)
            RETURNING id, title, is_complete
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.is_complete)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(todo_id = row.id, "Todo row inserted");

        row.into_todo()
    }

    async fn replace(&self, id: TodoId, draft: &TodoDraft) -> TodoResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE todos
            SET title = $2, is_complete = $3
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .bind(draft.title.as_str())
        .bind(draft.is_complete)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(TodoError::NotFound(id));
        }

        Ok(())
    }

    async fn delete(&self, id: TodoId) -> TodoResult<()> {
        let deleted = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(TodoError::NotFound(id));
        }

        Ok(())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i32,
    title: String,
    is_complete: bool,
}

impl TodoRow {
    fn into_todo(self) -> TodoResult<Todo> {
        let title = TodoTitle::new(self.title)
            .map_err(|_| TodoError::Internal(format!("todo {} has an empty title", self.id)))?;

        Ok(Todo {
            id: TodoId::new(self.id),
            title,
            is_complete: self.is_complete,
        })
    }
}
