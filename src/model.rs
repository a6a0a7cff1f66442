use chrono::{DateTime, Utc};

// A row of the `todo` table as returned by the list query
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub task: String,
    pub done: i64,
    pub updated: DateTime<Utc>,
}

// Body returned after a successful insert
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreatedTodo {
    pub id: i64,
    pub username: String,
    pub task: String,
    pub done: i64,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoggedInUser {
    pub username: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: LoggedInUser,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
