use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Nutritionist {
    pub id: i32,
    pub name: String,
    pub specialization: String,
    pub rating: i32,
    pub email: String,
}

/// Insert payload; id and rating are database-assigned.
#[derive(Debug, Clone)]
pub struct NewNutritionist {
    pub name: String,
    pub specialization: String,
    pub email: String,
}
