use sqlx::PgPool;

use crate::database::models::{NewNutritionist, Nutritionist, PersonSummary};

pub async fn insert(pool: &PgPool, new: &NewNutritionist) -> Result<Nutritionist, sqlx::Error> {
    sqlx::query_as::<_, Nutritionist>(
        "INSERT INTO nutritionists (name, specialization, email)
         VALUES ($1, $2, $3)
         RETURNING id, name, specialization, rating, email",
    )
    .bind(&new.name)
    .bind(&new.specialization)
    .bind(&new.email)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Nutritionist>, sqlx::Error> {
    sqlx::query_as::<_, Nutritionist>(
        "SELECT id, name, specialization, rating, email FROM nutritionists WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_summaries(pool: &PgPool) -> Result<Vec<PersonSummary>, sqlx::Error> {
    sqlx::query_as::<_, PersonSummary>("SELECT id, name FROM nutritionists ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Persists in-place mutations of a fetched row.
pub async fn update(pool: &PgPool, nutritionist: &Nutritionist) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE nutritionists
         SET name = $2, specialization = $3, rating = $4, email = $5
         WHERE id = $1",
    )
    .bind(nutritionist.id)
    .bind(&nutritionist.name)
    .bind(&nutritionist.specialization)
    .bind(nutritionist.rating)
    .bind(&nutritionist.email)
    .execute(pool)
    .await?;

    Ok(())
}
