use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    error::ApiError,
    model::{CreatedTodo, LoggedInUser, LoginResponse, MessageResponse},
    schema::{required, CreateTodoSchema, LoginSchema, UpdateTodoSchema},
    AppState,
};

// An id that is not an integer cannot match any row
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

// Username-only login: presence of the name is the whole check
pub async fn login(
    body: Result<Json<LoginSchema>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    const MISSING: ApiError = ApiError::Validation("Username is required");

    let Json(body) = body.map_err(|_| MISSING)?;
    let username = required(&body.username).ok_or(MISSING)?;

    tracing::debug!(username, "login");
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user: LoggedInUser {
            username: username.to_string(),
        },
    }))
}

// Handler for getting all Todo items of one user
pub async fn get_todos(
    Path(username): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = data.store.list_todos(&username).await?;
    Ok(Json(todos))
}

// Handler for creating a new Todo
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    body: Result<Json<CreateTodoSchema>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    const MISSING: ApiError = ApiError::Validation("Username and task are required");

    let Json(body) = body.map_err(|_| MISSING)?;
    let (Some(username), Some(task)) = (required(&body.username), required(&body.task)) else {
        return Err(MISSING);
    };

    let id = data.store.insert_todo(username, task).await?;
    tracing::debug!(id, username, "todo created");

    let created = CreatedTodo {
        id,
        username: username.to_string(),
        task: task.to_string(),
        done: 0,
        updated: Utc::now(),
    };
    Ok((StatusCode::CREATED, Json(created)))
}

// Handler for setting the done flag of a Todo by ID
pub async fn update_todo(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
    body: Result<Json<UpdateTodoSchema>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    // A request without a JSON body leaves `done` unset
    let done = match body {
        Ok(Json(body)) => body.done,
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(_) => return Err(ApiError::Validation("Invalid done value")),
    };

    let rows_affected = data.store.update_done(id, done).await?;
    if rows_affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse::new("Todo updated successfully")))
}

// Handler for deleting a Todo by ID
pub async fn delete_todo(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let rows_affected = data.store.delete_todo(id).await?;
    if rows_affected == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::debug!(id, "todo deleted");
    Ok(Json(MessageResponse::new("Todo deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_ids_are_not_found() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ApiError::NotFound)));
        assert!(matches!(
            parse_id("99999999999999999999"),
            Err(ApiError::NotFound)
        ));
    }
}
