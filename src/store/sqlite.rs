use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    query, query_as,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use super::{TodoStore, DELETE_TODO, INSERT_TODO, LIST_TODOS, UPDATE_DONE};
use crate::{model::TodoItem, schema::DoneFlag};

pub struct SqliteStore {
    db: Pool<Sqlite>,
}

impl SqliteStore {
    /// Connects to `url`, creating the database file if it is missing.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let db = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self { db })
    }

    /// A private in-memory database with the schema already applied.
    ///
    /// The pool holds a single connection that is never recycled, since each
    /// `sqlite::memory:` connection is its own database.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { db };
        store.ensure_schema().await?;
        Ok(store)
    }
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        query(
            r#"CREATE TABLE IF NOT EXISTS todo (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        task TEXT NOT NULL,
        done INTEGER NOT NULL DEFAULT 0,
        updated DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    );"#,
        )
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn list_todos(&self, username: &str) -> Result<Vec<TodoItem>, sqlx::Error> {
        query_as::<_, TodoItem>(LIST_TODOS)
            .bind(username)
            .fetch_all(&self.db)
            .await
    }

    async fn insert_todo(&self, username: &str, task: &str) -> Result<i64, sqlx::Error> {
        let result = query(INSERT_TODO)
            .bind(username)
            .bind(task)
            .execute(&self.db)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update_done(&self, id: i64, done: Option<DoneFlag>) -> Result<u64, sqlx::Error> {
        let update = query(UPDATE_DONE);
        let update = match done {
            None => update.bind(None::<i64>),
            Some(DoneFlag::Bool(value)) => update.bind(i64::from(value)),
            Some(DoneFlag::Int(value)) => update.bind(value),
            Some(DoneFlag::Float(value)) => update.bind(value),
            Some(DoneFlag::Str(value)) => update.bind(value),
        };
        let result = update.bind(id).execute(&self.db).await?;
        Ok(result.rows_affected())
    }

    async fn delete_todo(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = query(DELETE_TODO).bind(id).execute(&self.db).await?;
        Ok(result.rows_affected())
    }
}
