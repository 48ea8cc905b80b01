// handlers/clients.rs - /clients route handlers
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::NewClient;
use crate::database::repository::clients;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::AppState;

use super::{keep_or, required, required_id};

#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
}

/// GET /clients - list (id, name) summaries
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let summaries = clients::list_summaries(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "data": summaries,
    })))
}

/// POST /clients - create from name, country and email
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateClientRequest>,
) -> Result<Json<Value>, ApiError> {
    let new = NewClient {
        name: required(body.name)?,
        country: required(body.country)?,
        email: required(body.email)?,
    };

    let client = clients::insert(&state.pool, &new).await?;

    Ok(Json(json!({
        "success": true,
        "email": client.email,
        "message": "client created",
    })))
}

/// PATCH /clients - update profile fields in place
pub async fn update(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<UpdateClientRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = required_id(body.id)?;

    let mut client = clients::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::unprocessable)?;

    client.name = keep_or(&client.name, body.name);
    client.country = keep_or(&client.country, body.country);
    client.email = keep_or(&client.email, body.email);

    clients::update(&state.pool, &client).await?;

    Ok(Json(json!({
        "success": true,
        "id": id,
        "message": "User data updated",
    })))
}

/// GET /clients/:id - profile record (no id in the payload)
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Value>, ApiError> {
    let client = clients::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(json!({
        "success": true,
        "data": client,
    })))
}
