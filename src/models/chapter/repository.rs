//! Persistence seam used by the chapter handlers.
//!
//! Handlers only see `dyn ChapterRepository`, so the PostgreSQL backend can
//! be swapped for another store without touching request handling.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use super::queries;
use super::types::{Chapter, ChapterFilter, ChapterForm};

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    /// Fetch one chapter with its parent document.
    async fn find_by_id(&self, id: i64) -> Result<Chapter, AppError>;

    /// Persist a new chapter; the store assigns the id.
    async fn create(&self, form: &ChapterForm) -> Result<Chapter, AppError>;

    /// Overwrite chapter `id` with `form` and return the stored record.
    async fn update_by_id(&self, id: i64, form: &ChapterForm) -> Result<Chapter, AppError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Filtered, ordered, paginated listing.
    async fn find_all(&self, filter: &ChapterFilter) -> Result<Vec<Chapter>, AppError>;
}

/// PostgreSQL-backed repository.
#[derive(Clone)]
pub struct PgChapterRepository {
    pool: PgPool,
}

impl PgChapterRepository {
    pub fn new(pool: PgPool) -> Self {
        PgChapterRepository { pool }
    }
}

#[async_trait]
impl ChapterRepository for PgChapterRepository {
    async fn find_by_id(&self, id: i64) -> Result<Chapter, AppError> {
        queries::find_by_id(&self.pool, id).await
    }

    async fn create(&self, form: &ChapterForm) -> Result<Chapter, AppError> {
        queries::create(&self.pool, form).await
    }

    async fn update_by_id(&self, id: i64, form: &ChapterForm) -> Result<Chapter, AppError> {
        queries::update_by_id(&self.pool, id, form).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        queries::delete_by_id(&self.pool, id).await
    }

    async fn find_all(&self, filter: &ChapterFilter) -> Result<Vec<Chapter>, AppError> {
        queries::find_all(&self.pool, filter).await
    }
}
