// handlers/articles.rs - /articles route handlers
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::NewArticle;
use crate::database::repository::{articles, nutritionists};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::AppState;

use super::{keep_or, required, required_id};

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub nutritionist: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub nutritionist: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    pub client_id: Option<String>,
    pub nutritionist_id: Option<String>,
}

/// GET /articles - all articles, one author's, or a client's subscribed feed
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ArticleQuery>,
) -> Result<Json<Value>, ApiError> {
    let articles = if let Some(client_id) = parse_filter(query.client_id)? {
        articles::list_for_client(&state.pool, client_id).await?
    } else if let Some(nutritionist_id) = parse_filter(query.nutritionist_id)? {
        articles::list_by_nutritionist(&state.pool, nutritionist_id).await?
    } else {
        articles::list_all(&state.pool).await?
    };

    Ok(Json(json!({
        "success": true,
        "data": articles,
    })))
}

/// POST /articles - publish under an existing nutritionist
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateArticleRequest>,
) -> Result<Json<Value>, ApiError> {
    let title = required(body.title)?;
    let content = required(body.content)?;

    // An author id of zero is as good as missing.
    let nutritionist_id = match body.nutritionist {
        Some(id) if id != 0 => id,
        _ => {
            return Err(ApiError::precondition_failed().with_message("required fields expected"))
        }
    };

    let author = nutritionists::find_by_id(&state.pool, nutritionist_id)
        .await?
        .ok_or_else(ApiError::unprocessable)?;

    let new = NewArticle {
        title,
        content,
        nutritionist_id: author.id,
    };
    articles::insert(&state.pool, &new).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Article created",
    })))
}

/// PATCH /articles - edit text or reassign the author; refreshes the date
pub async fn update(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<UpdateArticleRequest>,
) -> Result<Json<Value>, ApiError> {
    let id = required_id(body.id)?;

    let mut article = articles::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::unprocessable)?;

    article.title = keep_or(&article.title, body.title);
    article.content = keep_or(&article.content, body.content);
    if let Some(nutritionist_id) = body.nutritionist {
        if nutritionist_id != 0 {
            article.nutritionist_id = nutritionist_id;
        }
    }

    articles::update(&state.pool, &article).await?;

    Ok(Json(json!({
        "success": true,
        "id": id,
        "message": "Article Updated.",
    })))
}

/// DELETE /articles/:id - remove one article
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Value>, ApiError> {
    let article = articles::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::unprocessable)?;

    articles::delete(&state.pool, article.id).await?;

    Ok(Json(json!({
        "success": true,
        "id": id,
    })))
}

// Empty filter strings count as absent; anything else must parse as an id.
fn parse_filter(param: Option<String>) -> Result<Option<i32>, ApiError> {
    match param.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| ApiError::not_found()),
    }
}
