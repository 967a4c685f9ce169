//! Todo handlers
//!
//! Each handler decodes its input, makes exactly one store call and maps the
//! outcome to a status code. Error responses carry no body.

use super::error_status;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use todo_core::{Todo, TodoError, TodoPayload};
use tracing::{debug, info};

/// Unwrap the JSON body, treating any decode failure as bad input.
fn decode(payload: Result<Json<TodoPayload>, JsonRejection>) -> Result<TodoPayload, StatusCode> {
    payload.map(|Json(p)| p).map_err(|rejection| {
        debug!("Rejected todo body: {}", rejection.body_text());
        StatusCode::BAD_REQUEST
    })
}

/// Unwrap the `{id}` segment, answering a non-integer id with a bare 400.
fn parse_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, StatusCode> {
    path.map(|Path(id)| id).map_err(|rejection| {
        debug!("Rejected todo id: {}", rejection.body_text());
        StatusCode::BAD_REQUEST
    })
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, StatusCode> {
    let todos = state.store.list_all().await.map_err(error_status)?;
    Ok(Json(todos))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, StatusCode> {
    let id = parse_id(path)?;
    let todo = state.store.get_by_id(id).await.map_err(error_status)?;
    Ok(Json(todo))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, StatusCode> {
    let input = decode(payload)?
        .into_create_input()
        .map_err(|e| error_status(TodoError::from(e)))?;

    let todo = state.store.insert(&input).await.map_err(error_status)?;
    info!("Created todo {}", todo.id);

    let location = format!("/api/todos/{}", todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<Json<Todo>, StatusCode> {
    let id = parse_id(path)?;
    let input = decode(payload)?
        .into_update_input()
        .map_err(|e| error_status(TodoError::from(e)))?;

    let todo = state.store.update(id, &input).await.map_err(error_status)?;
    Ok(Json(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, StatusCode> {
    let id = parse_id(path)?;
    state.store.delete(id).await.map_err(error_status)?;
    info!("Deleted todo {}", id);
    Ok(StatusCode::NO_CONTENT)
}
