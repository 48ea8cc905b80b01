use sqlx::PgPool;

use crate::database::models::{Article, NewArticle};

const COLUMNS: &str = "id, title, date_created, content, nutritionist_id";

pub async fn insert(pool: &PgPool, new: &NewArticle) -> Result<Article, sqlx::Error> {
    sqlx::query_as::<_, Article>(&format!(
        "INSERT INTO articles (title, content, nutritionist_id)
         VALUES ($1, $2, $3)
         RETURNING {COLUMNS}"
    ))
    .bind(&new.title)
    .bind(&new.content)
    .bind(new.nutritionist_id)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(&format!("SELECT {COLUMNS} FROM articles WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(&format!("SELECT {COLUMNS} FROM articles ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn list_by_nutritionist(
    pool: &PgPool,
    nutritionist_id: i32,
) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(&format!(
        "SELECT {COLUMNS} FROM articles WHERE nutritionist_id = $1 ORDER BY id"
    ))
    .bind(nutritionist_id)
    .fetch_all(pool)
    .await
}

/// Articles authored by every nutritionist the client subscribes to.
pub async fn list_for_client(pool: &PgPool, client_id: i32) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as::<_, Article>(
        "SELECT a.id, a.title, a.date_created, a.content, a.nutritionist_id
         FROM articles a
         JOIN subscriptions s ON s.nutritionist_id = a.nutritionist_id
         WHERE s.client_id = $1
         ORDER BY a.id",
    )
    .bind(client_id)
    .fetch_all(pool)
    .await
}

/// Persists an edit; the creation date moves to the edit time.
pub async fn update(pool: &PgPool, article: &Article) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE articles
         SET title = $2, content = $3, nutritionist_id = $4, date_created = now()
         WHERE id = $1",
    )
    .bind(article.id)
    .bind(&article.title)
    .bind(&article.content)
    .bind(article.nutritionist_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
