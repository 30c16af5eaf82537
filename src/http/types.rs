use serde::{Deserialize, Serialize};

use crate::domain::todo::TodoUpdate;

#[derive(Debug, Clone, Serialize)]
pub struct TodoResponse {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    pub completed: bool,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub order: Option<i32>,
    pub completed: Option<bool>,
}

impl From<TodoPatch> for TodoUpdate {
    fn from(patch: TodoPatch) -> Self {
        Self { title: patch.title, order: patch.order, completed: patch.completed }
    }
}
