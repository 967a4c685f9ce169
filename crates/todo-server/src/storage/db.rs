//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use todo_core::{Todo, TodoError, TodoInput, TodoStore};

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database at `database_url` and make sure the schema exists.
    ///
    /// Accepts any sqlx SQLite URL, e.g. `sqlite://data/todos.db` or
    /// `sqlite::memory:`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_url);

        let in_memory = database_url.contains(":memory:");

        let mut options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new();

        if in_memory {
            // An in-memory database lives only as long as its connections.
            // Keep exactly one open for the lifetime of the pool.
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            if let Some(parent) = database_file(database_url)
                .as_deref()
                .and_then(Path::parent)
            {
                if !parent.as_os_str().is_empty() {
                    tracing::info!("Creating parent directory: {}", parent.display());
                    tokio::fs::create_dir_all(parent).await.with_context(|| {
                        format!("Failed to create database directory: {}", parent.display())
                    })?;
                }
            }

            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
            pool_options = pool_options.max_connections(max_connections.max(1));
        }

        tracing::info!("Connecting to SQLite...");

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_url)
            })?;

        tracing::info!("SQLite connection established, ensuring schema...");

        Self::ensure_schema(&pool)
            .await
            .context("Failed to create database schema")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    /// Create the `todos` table if it is missing. Safe to run on every start.
    async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (length(title) BETWEEN 1 AND 500),
                is_completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos (created_at, id)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TodoStore for Database {
    async fn list_all(&self) -> todo_core::Result<Vec<Todo>> {
        let rows: Vec<TodoRow> = sqlx::query_as(
            r#"
            SELECT id, title, is_completed, created_at
            FROM todos
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(TodoError::storage)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_by_id(&self, id: i64) -> todo_core::Result<Todo> {
        let row: Option<TodoRow> = sqlx::query_as(
            r#"
            SELECT id, title, is_completed, created_at
            FROM todos WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(TodoError::storage)?;

        row.map(|r| r.into()).ok_or(TodoError::NotFound(id))
    }

    async fn insert(&self, input: &TodoInput) -> todo_core::Result<Todo> {
        let row: TodoRow = sqlx::query_as(
            r#"
            INSERT INTO todos (title, is_completed)
            VALUES (?1, ?2)
            RETURNING id, title, is_completed, created_at
            "#,
        )
        .bind(input.title.as_str())
        .bind(input.is_completed)
        .fetch_one(&self.pool)
        .await
        .map_err(TodoError::storage)?;

        tracing::debug!("Inserted todo {}", row.id);

        Ok(row.into())
    }

    async fn update(&self, id: i64, input: &TodoInput) -> todo_core::Result<Todo> {
        let row: Option<TodoRow> = sqlx::query_as(
            r#"
            UPDATE todos SET title = ?1, is_completed = ?2
            WHERE id = ?3
            RETURNING id, title, is_completed, created_at
            "#,
        )
        .bind(input.title.as_str())
        .bind(input.is_completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(TodoError::storage)?;

        row.map(|r| r.into()).ok_or(TodoError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> todo_core::Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(TodoError::storage)?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id));
        }

        tracing::debug!("Deleted todo {}", id);

        Ok(())
    }

    async fn ping(&self) -> todo_core::Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(TodoError::storage)?;

        Ok(())
    }
}

/// File path part of a `sqlite:` URL, if it names a file.
fn database_file(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    is_completed: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<TodoRow> for Todo {
    fn from(r: TodoRow) -> Self {
        Todo {
            id: r.id,
            title: r.title,
            is_completed: r.is_completed,
            created_at: r.created_at,
        }
    }
}
