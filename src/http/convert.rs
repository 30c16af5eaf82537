use axum::http::StatusCode;

use crate::domain::data_layer::DataLayerError;
use crate::domain::todo::Todo;
use crate::http::types::TodoResponse;

#[derive(Debug, Clone)]
pub struct TodoConverter {
    base_url: String,
}

impl TodoConverter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn todo(&self, todo: Todo) -> TodoResponse {
        TodoResponse {
            url: format!("{}/{}", self.base_url, todo.id),
            title: todo.title,
            order: todo.order,
            completed: todo.completed,
        }
    }

    pub fn error(&self, error: DataLayerError) -> StatusCode {
        match error {
            DataLayerError::NotFound => StatusCode::NOT_FOUND,
            DataLayerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
