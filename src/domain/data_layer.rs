use async_trait::async_trait;
use thiserror::Error;

use super::todo::{NewTodo, Todo, TodoUpdate};

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("todo not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl DataLayerError {
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

#[async_trait]
pub trait DataLayer: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Todo>, DataLayerError>;
    async fn get(&self, id: &str) -> Result<Todo, DataLayerError>;
    async fn add(&self, new: NewTodo) -> Result<Todo, DataLayerError>;
    async fn update(&self, id: &str, update: TodoUpdate) -> Result<Todo, DataLayerError>;
    async fn delete(&self, id: &str) -> Result<(), DataLayerError>;
    async fn delete_all(&self) -> Result<(), DataLayerError>;
}
