use sqlx::PgPool;

use crate::errors::AppError;
use super::types::*;

/// Find a single document by ID.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Document>, AppError> {
    let doc = sqlx::query_as::<_, Document>(
        "SELECT id, name, title, description, created_at, updated_at FROM docs WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(doc)
}

/// Create a new document, returning its id.
pub async fn create(pool: &PgPool, new: &NewDocument) -> Result<i64, AppError> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO docs (name, title, description) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&new.name)
    .bind(&new.title)
    .bind(&new.description)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Delete a document. Its chapters go with it (ON DELETE CASCADE).
pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
    sqlx::query("DELETE FROM docs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
