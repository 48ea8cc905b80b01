// handlers/nutritionists.rs - /nutritionists route handlers
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::NewNutritionist;
use crate::database::repository::nutritionists;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::AppState;

use super::{keep_or, required, required_id};

#[derive(Debug, Deserialize)]
pub struct CreateNutritionistRequest {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNutritionistRequest {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub email: Option<String>,
    pub rating: Option<i32>,
}

/// GET /nutritionists - list (id, name) summaries
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let summaries = nutritionists::list_summaries(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "data": summaries,
    })))
}

/// POST /nutritionists - create from name, specialization and email
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateNutritionistRequest>,
) -> Result<Json<Value>, ApiError> {
    let new = NewNutritionist {
        name: required(body.name)?,
        specialization: required(body.specialization)?,
        email: required(body.email)?,
    };

    let nutritionist = nutritionists::insert(&state.pool, &new).await?;

    Ok(Json(json!({
        "success": true,
        "email": nutritionist.email,
        "message": "Nutritionist Created",
    })))
}

/// PATCH /nutritionists - update the rating, or the profile fields
pub async fn update(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<UpdateNutritionistRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = required_id(body.id)?;

    let mut nutritionist = nutritionists::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::unprocessable)?;

    // A non-zero rating updates only the rating; otherwise the profile
    // fields move and the rating stays. A rating of zero cannot be set
    // this way.
    match body.rating {
        Some(rating) if rating != 0 => nutritionist.rating = rating,
        _ => {
            nutritionist.name = keep_or(&nutritionist.name, body.name);
            nutritionist.specialization =
                keep_or(&nutritionist.specialization, body.specialization);
            nutritionist.email = keep_or(&nutritionist.email, body.email);
        }
    }

    nutritionists::update(&state.pool, &nutritionist).await?;

    Ok(Json(json!({
        "success": true,
        "id": id,
        "message": "user data updated",
    })))
}

/// GET /nutritionists/:id - full record
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Value>, ApiError> {
    let nutritionist = nutritionists::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(json!({
        "success": true,
        "data": nutritionist,
    })))
}
