use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::errors::AppError;
use crate::models::document::Document;
use super::types::*;

/// Chapter columns plus the parent document, aliased `d_*`.
/// Callers supply `FROM <chapters> c LEFT JOIN docs d ON d.id = c.doc_id`.
const CHAPTER_COLUMNS: &str = "\
    SELECT c.id, c.name, c.title, c.description, c.level, c.sort, c.doc_id, \
           c.created_at, c.updated_at, \
           d.id AS d_id, d.name AS d_name, d.title AS d_title, \
           d.description AS d_description, \
           d.created_at AS d_created_at, d.updated_at AS d_updated_at";

#[derive(sqlx::FromRow)]
struct ChapterRow {
    id: i64,
    name: String,
    title: String,
    description: String,
    level: i64,
    sort: i64,
    doc_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    d_id: Option<i64>,
    d_name: Option<String>,
    d_title: Option<String>,
    d_description: Option<String>,
    d_created_at: Option<DateTime<Utc>>,
    d_updated_at: Option<DateTime<Utc>>,
}

impl From<ChapterRow> for Chapter {
    fn from(row: ChapterRow) -> Self {
        let doc = match (row.d_id, row.d_created_at, row.d_updated_at) {
            (Some(id), Some(created_at), Some(updated_at)) => Some(Document {
                id,
                name: row.d_name.unwrap_or_default(),
                title: row.d_title.unwrap_or_default(),
                description: row.d_description.unwrap_or_default(),
                created_at,
                updated_at,
            }),
            _ => None,
        };
        Chapter {
            id: row.id,
            name: row.name,
            title: row.title,
            description: row.description,
            level: row.level,
            sort: row.sort,
            doc_id: row.doc_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            doc,
        }
    }
}

/// Find a chapter with its document. Missing rows are `AppError::NotFound`.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Chapter, AppError> {
    let sql = format!(
        "{CHAPTER_COLUMNS} FROM chapters c LEFT JOIN docs d ON d.id = c.doc_id WHERE c.id = $1"
    );
    let row = sqlx::query_as::<_, ChapterRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(row.into())
}

/// Insert a chapter and return the stored row. Any id on the form is ignored.
pub async fn create(pool: &PgPool, form: &ChapterForm) -> Result<Chapter, AppError> {
    let sql = format!(
        "WITH c AS ( \
             INSERT INTO chapters (name, title, description, level, sort, doc_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING * \
         ) \
         {CHAPTER_COLUMNS} FROM c LEFT JOIN docs d ON d.id = c.doc_id"
    );
    let row = sqlx::query_as::<_, ChapterRow>(&sql)
        .bind(&form.name)
        .bind(&form.title)
        .bind(&form.description)
        .bind(form.level)
        .bind(form.sort)
        .bind(form.doc_id)
        .fetch_one(pool)
        .await?;
    Ok(row.into())
}

/// Overwrite every editable field of chapter `id` and return the stored row.
pub async fn update_by_id(pool: &PgPool, id: i64, form: &ChapterForm) -> Result<Chapter, AppError> {
    let sql = format!(
        "WITH c AS ( \
             UPDATE chapters SET name = $1, title = $2, description = $3, \
                    level = $4, sort = $5, doc_id = $6, updated_at = NOW() \
             WHERE id = $7 RETURNING * \
         ) \
         {CHAPTER_COLUMNS} FROM c LEFT JOIN docs d ON d.id = c.doc_id"
    );
    let row = sqlx::query_as::<_, ChapterRow>(&sql)
        .bind(&form.name)
        .bind(&form.title)
        .bind(&form.description)
        .bind(form.level)
        .bind(form.sort)
        .bind(form.doc_id)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(row.into())
}

/// Hard-delete a chapter. Deleting a missing row is `AppError::NotFound`.
pub async fn delete_by_id(pool: &PgPool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM chapters WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

/// Escape `LIKE` metacharacters so `term` matches literally under
/// `ESCAPE '\'`.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Build the listing query for `filter`.
fn list_query(filter: &ChapterFilter) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new(CHAPTER_COLUMNS);
    qb.push(" FROM chapters c LEFT JOIN docs d ON d.id = c.doc_id WHERE 1=1");

    if filter.doc_id != 0 {
        qb.push(" AND c.doc_id = ").push_bind(filter.doc_id);
    }
    if !filter.search.is_empty() {
        qb.push(" AND c.name ILIKE '%' || ")
            .push_bind(escape_like(&filter.search))
            .push(" || '%' ESCAPE '\\'");
    }

    let dir = filter.sort.dir_str();
    qb.push(format!(" ORDER BY c.{} {dir}, c.id {dir}", filter.sort.column));

    if filter.limit > 0 {
        qb.push(" LIMIT ").push_bind(filter.limit);
        qb.push(" OFFSET ").push_bind(filter.offset());
    }
    qb
}

/// List chapters matching `filter`, each with its document.
pub async fn find_all(pool: &PgPool, filter: &ChapterFilter) -> Result<Vec<Chapter>, AppError> {
    let rows = list_query(filter)
        .build_query_as::<ChapterRow>()
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Chapter::from).collect())
}
