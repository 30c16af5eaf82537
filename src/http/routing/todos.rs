use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::domain::data_layer::{DataLayer, DataLayerError};
use crate::domain::todo::NewTodo;
use crate::http::convert::TodoConverter;
use crate::http::types::{TodoPatch, TodoResponse};

#[derive(Clone)]
pub struct AppState<D: DataLayer> {
    pub data_layer: D,
    pub converter: TodoConverter,
}

pub fn router<D: DataLayer + Clone>(state: AppState<D>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_todos::<D>)
                .post(create_todo::<D>)
                .delete(delete_todos::<D>)
                .options(preflight),
        )
        .route(
            "/:id",
            get(get_todo::<D>).patch(update_todo::<D>).delete(delete_todo::<D>),
        )
        .with_state(state)
}

async fn list_todos<D: DataLayer>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<TodoResponse>>, StatusCode> {
    let todos = state.data_layer.list().await.map_err(|e| reject(&state.converter, e))?;
    Ok(Json(todos.into_iter().map(|t| state.converter.todo(t)).collect()))
}

async fn get_todo<D: DataLayer>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, StatusCode> {
    let todo = state.data_layer.get(&id).await.map_err(|e| reject(&state.converter, e))?;
    Ok(Json(state.converter.todo(todo)))
}

async fn create_todo<D: DataLayer>(
    State(state): State<AppState<D>>,
    Json(patch): Json<TodoPatch>,
) -> Result<(StatusCode, Json<TodoResponse>), StatusCode> {
    // Reject before touching the data layer
    let Some(title) = patch.title.filter(|t| !t.is_empty()) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let new = NewTodo { title, order: patch.order, completed: patch.completed.unwrap_or(false) };
    let todo = state.data_layer.add(new).await.map_err(|e| reject(&state.converter, e))?;
    Ok((StatusCode::CREATED, Json(state.converter.todo(todo))))
}

async fn update_todo<D: DataLayer>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<TodoResponse>, StatusCode> {
    let todo = state
        .data_layer
        .update(&id, patch.into())
        .await
        .map_err(|e| reject(&state.converter, e))?;
    Ok(Json(state.converter.todo(todo)))
}

async fn delete_todo<D: DataLayer>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    state.data_layer.delete(&id).await.map_err(|e| reject(&state.converter, e))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todos<D: DataLayer>(
    State(state): State<AppState<D>>,
) -> Result<StatusCode, StatusCode> {
    state.data_layer.delete_all().await.map_err(|e| reject(&state.converter, e))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

fn reject(converter: &TodoConverter, error: DataLayerError) -> StatusCode {
    if let DataLayerError::Internal(source) = &error {
        tracing::error!(error = %source, "data layer failure");
    }
    converter.error(error)
}
