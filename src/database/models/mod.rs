use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub mod article;
pub mod client;
pub mod nutritionist;
pub mod subscription;

pub use article::{Article, NewArticle};
pub use client::{Client, NewClient};
pub use nutritionist::{NewNutritionist, Nutritionist};
pub use subscription::{NewSubscription, Subscription};

/// (id, name) projection served by both people listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonSummary {
    pub id: i32,
    pub name: String,
}
