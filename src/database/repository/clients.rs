use sqlx::PgPool;

use crate::database::models::{Client, NewClient, PersonSummary};

pub async fn insert(pool: &PgPool, new: &NewClient) -> Result<Client, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "INSERT INTO clients (name, country, email)
         VALUES ($1, $2, $3)
         RETURNING id, name, country, email",
    )
    .bind(&new.name)
    .bind(&new.country)
    .bind(&new.email)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>("SELECT id, name, country, email FROM clients WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_summaries(pool: &PgPool) -> Result<Vec<PersonSummary>, sqlx::Error> {
    sqlx::query_as::<_, PersonSummary>("SELECT id, name FROM clients ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Persists in-place mutations of a fetched row.
pub async fn update(pool: &PgPool, client: &Client) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE clients SET name = $2, country = $3, email = $4 WHERE id = $1")
        .bind(client.id)
        .bind(&client.name)
        .bind(&client.country)
        .bind(&client.email)
        .execute(pool)
        .await?;

    Ok(())
}
