use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::error::Error;
use crate::models::{User, UserPayload};
use crate::state::AppState;

pub async fn index() -> &'static str {
    "Hello, from the users service!"
}

pub async fn add_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<Value>, Error> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = state.repo.create(&payload.firstname, &payload.email).await?;
    tracing::debug!(id, "user created");

    Ok(Json(json!({ "message": "User added successfully!" })))
}

pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, Error> {
    let users = state.repo.get_all().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, Error> {
    let user = state.repo.get_by_id(id).await?;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<Value>, Error> {
    let Json(payload) = payload?;
    payload.validate()?;

    state
        .repo
        .update(id, &payload.firstname, &payload.email)
        .await?;

    Ok(Json(json!({ "message": "User updated successfully!" })))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Error> {
    state.repo.delete(id).await?;
    Ok(Json(json!({ "message": "User deleted successfully!" })))
}
