//! Todo record, request bodies and their validation.
//!
//! Request bodies must be JSON objects. Their fields are taken loosely
//! (`serde_json::Value` per field) and then validated into `NewTodo` /
//! `TodoPatch`, so a wrong JSON type becomes a 400 with a readable message
//! rather than a framework rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Upper bound matching the `VARCHAR(255)` column.
pub const MAX_TITLE_CHARS: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated create request. `title` is trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
}

/// A validated partial update. `None` leaves the column untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

/// Only a JSON object is accepted; arrays and scalars fail to deserialize.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct CreateTodoBody {
    pub title: Option<Value>,
}

/// Only a JSON object is accepted; arrays and scalars fail to deserialize.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct UpdateTodoBody {
    pub title: Option<Value>,
    pub completed: Option<Value>,
}

impl From<Map<String, Value>> for CreateTodoBody {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            title: take_field(&mut map, "title"),
        }
    }
}

impl From<Map<String, Value>> for UpdateTodoBody {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            title: take_field(&mut map, "title"),
            completed: take_field(&mut map, "completed"),
        }
    }
}

// `null` counts as absent.
fn take_field(map: &mut Map<String, Value>, key: &str) -> Option<Value> {
    map.remove(key).filter(|value| !value.is_null())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl Health {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl CreateTodoBody {
    pub fn validate(self) -> Result<NewTodo, AppError> {
        let title = self
            .title
            .ok_or_else(|| AppError::Validation("Title is required".to_string()))?;
        Ok(NewTodo {
            title: validate_title(title)?,
        })
    }
}

impl UpdateTodoBody {
    pub fn validate(self) -> Result<TodoPatch, AppError> {
        let title = self.title.map(validate_title).transpose()?;
        let completed = match self.completed {
            None => None,
            Some(Value::Bool(flag)) => Some(flag),
            Some(_) => {
                return Err(AppError::Validation(
                    "Completed must be a boolean".to_string(),
                ))
            }
        };
        Ok(TodoPatch { title, completed })
    }
}

fn validate_title(value: Value) -> Result<String, AppError> {
    let Value::String(raw) = value else {
        return Err(AppError::Validation("Title is required".to_string()));
    };
    let title = raw.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "Title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(title.to_string())
}
