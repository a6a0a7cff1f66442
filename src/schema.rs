// Request body for the username-only login
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct LoginSchema {
    #[serde(default)]
    pub username: Option<String>,
}

// Struct representing the request body for creating a new Todo
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CreateTodoSchema {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
}

// Struct representing the request body for updating a Todo
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct UpdateTodoSchema {
    #[serde(default)]
    pub done: Option<DoneFlag>,
}

/// Value accepted for the `done` column. Booleans are stored as 1/0; numbers
/// and strings are bound as-is and left to the store to coerce.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DoneFlag {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Treats an absent or empty string as missing, as the login and create
/// routes both require non-empty fields.
pub fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_flag_accepts_booleans_and_integers() {
        let body: UpdateTodoSchema = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert_eq!(body.done, Some(DoneFlag::Bool(true)));

        let body: UpdateTodoSchema = serde_json::from_str(r#"{"done": 1}"#).unwrap();
        assert_eq!(body.done, Some(DoneFlag::Int(1)));
    }

    #[test]
    fn missing_done_decodes_as_none() {
        let body: UpdateTodoSchema = serde_json::from_str("{}").unwrap();
        assert!(body.done.is_none());
    }

    #[test]
    fn done_flag_keeps_floats_and_strings() {
        let body: UpdateTodoSchema = serde_json::from_str(r#"{"done": 1.5}"#).unwrap();
        assert_eq!(body.done, Some(DoneFlag::Float(1.5)));

        let body: UpdateTodoSchema = serde_json::from_str(r#"{"done": "1"}"#).unwrap();
        assert_eq!(body.done, Some(DoneFlag::Str("1".to_string())));
    }

    #[test]
    fn done_flag_rejects_objects() {
        assert!(serde_json::from_str::<UpdateTodoSchema>(r#"{"done": {"a": 1}}"#).is_err());
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let body: CreateTodoSchema =
            serde_json::from_str(r#"{"username": "", "task": "buy milk"}"#).unwrap();
        assert_eq!(required(&body.username), None);
        assert_eq!(required(&body.task), Some("buy milk"));
    }
}
