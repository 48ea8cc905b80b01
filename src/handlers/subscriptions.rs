// handlers/subscriptions.rs - /subscriptions route handler
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::NewSubscription;
use crate::database::repository::{clients, nutritionists, subscriptions};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub nutritionist_id: Option<i32>,
    pub client_id: Option<i32>,
}

/// POST /subscriptions - subscribe a client to a nutritionist
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateSubscriptionRequest>,
) -> Result<Json<Value>, ApiError> {
    // A missing id and an id no row answers to are the same failure here.
    let nutritionist = match body.nutritionist_id {
        Some(id) => nutritionists::find_by_id(&state.pool, id).await?,
        None => None,
    };
    let client = match body.client_id {
        Some(id) => clients::find_by_id(&state.pool, id).await?,
        None => None,
    };

    let (nutritionist, client) = match (nutritionist, client) {
        (Some(nutritionist), Some(client)) => (nutritionist, client),
        _ => {
            return Err(ApiError::precondition_failed()
                .with_message("provide accurate data for required fields"))
        }
    };

    // Checked, not constrained: a concurrent duplicate can still slip in.
    if subscriptions::exists(&state.pool, nutritionist.id, client.id).await? {
        return Err(ApiError::unprocessable()
            .with_message("Client already subscribed to this nutritionist"));
    }

    let new = NewSubscription {
        nutritionist_id: nutritionist.id,
        client_id: client.id,
    };
    subscriptions::insert(&state.pool, &new).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Client subscription added",
    })))
}
