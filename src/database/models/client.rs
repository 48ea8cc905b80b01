use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    // The public client payload never carries the id.
    #[serde(skip_serializing)]
    pub id: i32,
    pub name: String,
    pub country: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub country: String,
    pub email: String,
}
