use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{Config, StoreConfig},
    error::ServerError,
    model::TodoItem,
    schema::DoneFlag,
};

pub mod mysql;
pub mod sqlite;

pub use mysql::MySqlStore;
pub use sqlite::SqliteStore;

/// Handle to the relational store holding the `todo` table. Every method runs
/// exactly one statement.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Creates the `todo` table when it does not exist yet.
    async fn ensure_schema(&self) -> Result<(), sqlx::Error>;

    /// Items owned by `username`, highest id first.
    async fn list_todos(&self, username: &str) -> Result<Vec<TodoItem>, sqlx::Error>;

    /// Inserts a row and returns its assigned id.
    async fn insert_todo(&self, username: &str, task: &str) -> Result<i64, sqlx::Error>;

    /// Sets `done` on the row with `id`; `None` binds NULL. Returns the
    /// number of rows affected.
    async fn update_done(&self, id: i64, done: Option<DoneFlag>) -> Result<u64, sqlx::Error>;

    /// Removes the row with `id`. Returns the number of rows affected.
    async fn delete_todo(&self, id: i64) -> Result<u64, sqlx::Error>;
}

pub(crate) const LIST_TODOS: &str =
    "SELECT id, task, done, updated FROM todo WHERE username = ? ORDER BY id DESC";
pub(crate) const INSERT_TODO: &str = "INSERT INTO todo (username, task) VALUES (?, ?)";
pub(crate) const UPDATE_DONE: &str = "UPDATE todo SET done = ? WHERE id = ?";
pub(crate) const DELETE_TODO: &str = "DELETE FROM todo WHERE id = ?";

/// Opens the backend selected by `config`.
pub async fn connect(config: &Config) -> Result<Arc<dyn TodoStore>, ServerError> {
    let store: Arc<dyn TodoStore> = match config.store_config()? {
        StoreConfig::Sqlite(url) => {
            tracing::info!(%url, "connecting to sqlite store");
            Arc::new(SqliteStore::connect(&url, config.max_connections).await?)
        }
        StoreConfig::MySql(options) => {
            tracing::info!("connecting to mysql store");
            Arc::new(MySqlStore::connect(options, config.max_connections).await?)
        }
    };
    Ok(store)
}
