use sqlx::PgPool;

use crate::database::models::{NewSubscription, Subscription};

pub async fn insert(pool: &PgPool, new: &NewSubscription) -> Result<Subscription, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "INSERT INTO subscriptions (nutritionist_id, client_id)
         VALUES ($1, $2)
         RETURNING id, nutritionist_id, client_id, subscription_status",
    )
    .bind(new.nutritionist_id)
    .bind(new.client_id)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "SELECT id, nutritionist_id, client_id, subscription_status
         FROM subscriptions WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Application-level uniqueness check; insert may still race it.
pub async fn exists(
    pool: &PgPool,
    nutritionist_id: i32,
    client_id: i32,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM subscriptions WHERE nutritionist_id = $1 AND client_id = $2)",
    )
    .bind(nutritionist_id)
    .bind(client_id)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM subscriptions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
