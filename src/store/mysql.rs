use async_trait::async_trait;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    query, query_as, MySql, Pool,
};

use super::{TodoStore, DELETE_TODO, INSERT_TODO, LIST_TODOS, UPDATE_DONE};
use crate::{model::TodoItem, schema::DoneFlag};

pub struct MySqlStore {
    db: Pool<MySql>,
}

impl MySqlStore {
    pub async fn connect(
        options: MySqlConnectOptions,
        max_connections: u32,
    ) -> Result<Self, sqlx::Error> {
        let db = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self { db })
    }
}

#[async_trait]
impl TodoStore for MySqlStore {
    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        query(
            r#"CREATE TABLE IF NOT EXISTS todo (
        id INT AUTO_INCREMENT PRIMARY KEY,
        username VARCHAR(255) NOT NULL,
        task TEXT NOT NULL,
        done TINYINT(1) NOT NULL DEFAULT 0,
        updated TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )"#,
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
        // AUTO_INCREMENT on a signed INT never exceeds i64
        Ok(result.last_insert_id() as i64)
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
