use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    // Article payloads expose only title, date and content.
    #[serde(skip_serializing)]
    pub id: i32,
    pub title: String,
    pub date_created: DateTime<Utc>,
    pub content: String,
    #[serde(skip_serializing)]
    pub nutritionist_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub nutritionist_id: i32,
}
