use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    pub id: i32,
    pub nutritionist_id: i32,
    pub client_id: i32,
    pub subscription_status: bool,
}

#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub nutritionist_id: i32,
    pub client_id: i32,
}
