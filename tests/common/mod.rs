//! Shared test infrastructure.
//!
//! - `MemoryChapterRepository` - in-process `ChapterRepository` for handler
//!   tests, with switches to make writes, deletes or listings fail.
//! - `pg_pool()` - migrated PostgreSQL pool when `DATABASE_URL` is set.
#![allow(dead_code)]

use std::cmp::Ordering;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use sqlx::PgPool;

use blog_admin::errors::AppError;
use blog_admin::models::chapter::{
    Chapter, ChapterFilter, ChapterForm, ChapterRepository, SortDir,
};
use blog_admin::models::document::Document;

// ============================================================================
// IN-MEMORY REPOSITORY
// ============================================================================

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
}

#[derive(Default)]
struct State {
    next_chapter_id: i64,
    next_doc_id: i64,
    chapters: Vec<Chapter>,
    docs: Vec<Document>,
}

impl State {
    fn doc(&self, id: i64) -> Option<Document> {
        self.docs.iter().find(|d| d.id == id).cloned()
    }
}

#[derive(Default)]
pub struct MemoryChapterRepository {
    state: Mutex<State>,
    pub fail_writes: AtomicBool,
    pub fail_deletes: AtomicBool,
    pub fail_lists: AtomicBool,
}

fn storage_down() -> AppError {
    AppError::Db(sqlx::Error::PoolTimedOut)
}

fn fk_violation(doc_id: i64) -> AppError {
    AppError::Db(sqlx::Error::Protocol(format!(
        "insert or update on table \"chapters\" violates foreign key constraint (doc_id={doc_id})"
    )))
}

impl MemoryChapterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_doc(&self, name: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.next_doc_id += 1;
        let id = state.next_doc_id;
        state.docs.push(Document {
            id,
            name: name.to_string(),
            title: name.to_uppercase(),
            description: String::new(),
            created_at: base_time(),
            updated_at: base_time(),
        });
        id
    }

    /// Insert a chapter directly, bypassing validation. `created_at`
    /// advances one second per chapter so default ordering is stable.
    pub fn seed(&self, name: &str, doc_id: i64, sort: i64) -> Chapter {
        let mut state = self.state.lock().unwrap();
        state.next_chapter_id += 1;
        let id = state.next_chapter_id;
        let at = base_time() + Duration::seconds(id);
        let chapter = Chapter {
            id,
            name: name.to_string(),
            title: format!("Title {name}"),
            description: String::new(),
            level: 0,
            sort,
            doc_id,
            created_at: at,
            updated_at: at,
            doc: state.doc(doc_id),
        };
        state.chapters.push(chapter.clone());
        chapter
    }

    pub fn get(&self, id: i64) -> Option<Chapter> {
        let state = self.state.lock().unwrap();
        state.chapters.iter().find(|c| c.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().chapters.len()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, AtomicOrdering::SeqCst);
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, AtomicOrdering::SeqCst);
    }

    pub fn fail_lists(&self) {
        self.fail_lists.store(true, AtomicOrdering::SeqCst);
    }
}

fn compare(a: &Chapter, b: &Chapter, column: &str) -> Ordering {
    let primary = match column {
        "id" => a.id.cmp(&b.id),
        "name" => a.name.cmp(&b.name),
        "title" => a.title.cmp(&b.title),
        "level" => a.level.cmp(&b.level),
        "sort" => a.sort.cmp(&b.sort),
        "doc_id" => a.doc_id.cmp(&b.doc_id),
        "updated_at" => a.updated_at.cmp(&b.updated_at),
        _ => a.created_at.cmp(&b.created_at),
    };
    primary.then(a.id.cmp(&b.id))
}

#[async_trait]
impl ChapterRepository for MemoryChapterRepository {
    async fn find_by_id(&self, id: i64) -> Result<Chapter, AppError> {
        self.get(id).ok_or(AppError::NotFound)
    }

    async fn create(&self, form: &ChapterForm) -> Result<Chapter, AppError> {
        if self.fail_writes.load(AtomicOrdering::SeqCst) {
            return Err(storage_down());
        }
        let doc_exists = self.state.lock().unwrap().doc(form.doc_id).is_some();
        if !doc_exists {
            return Err(fk_violation(form.doc_id));
        }
        let mut chapter = self.seed(&form.name, form.doc_id, form.sort);
        chapter.title = form.title.clone();
        chapter.description = form.description.clone();
        chapter.level = form.level;

        let mut state = self.state.lock().unwrap();
        if let Some(stored) = state.chapters.iter_mut().find(|c| c.id == chapter.id) {
            *stored = chapter.clone();
        }
        Ok(chapter)
    }

    async fn update_by_id(&self, id: i64, form: &ChapterForm) -> Result<Chapter, AppError> {
        if self.fail_writes.load(AtomicOrdering::SeqCst) {
            return Err(storage_down());
        }
        let mut state = self.state.lock().unwrap();
        let doc = state.doc(form.doc_id).ok_or_else(|| fk_violation(form.doc_id))?;
        let stored = state
            .chapters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound)?;
        stored.name = form.name.clone();
        stored.title = form.title.clone();
        stored.description = form.description.clone();
        stored.level = form.level;
        stored.sort = form.sort;
        stored.doc_id = form.doc_id;
        stored.updated_at = stored.updated_at + Duration::minutes(1);
        stored.doc = Some(doc);
        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        if self.fail_deletes.load(AtomicOrdering::SeqCst) {
            return Err(storage_down());
        }
        let mut state = self.state.lock().unwrap();
        let before = state.chapters.len();
        state.chapters.retain(|c| c.id != id);
        if state.chapters.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn find_all(&self, filter: &ChapterFilter) -> Result<Vec<Chapter>, AppError> {
        if self.fail_lists.load(AtomicOrdering::SeqCst) {
            return Err(storage_down());
        }
        let state = self.state.lock().unwrap();
        let needle = filter.search.to_lowercase();
        let mut rows: Vec<Chapter> = state
            .chapters
            .iter()
            .filter(|c| filter.doc_id == 0 || c.doc_id == filter.doc_id)
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        rows.sort_by(|a, b| compare(a, b, filter.sort.column));
        if filter.sort.dir == SortDir::Desc {
            rows.reverse();
        }

        let skip = usize::try_from(filter.offset()).unwrap_or(usize::MAX);
        let rows = rows.into_iter().skip(skip);
        let rows = if filter.limit > 0 {
            rows.take(usize::try_from(filter.limit).unwrap_or(usize::MAX)).collect()
        } else {
            rows.collect()
        };
        Ok(rows)
    }
}

// ============================================================================
// POSTGRES
// ============================================================================

/// Connect to `DATABASE_URL` and run migrations. Returns `None` when the
/// variable is unset so database tests can be skipped locally.
pub async fn pg_pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPool::connect(&url).await.expect("Failed to connect to test DB");
    blog_admin::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    Some(pool)
}

/// Unique-ish suffix so repeated runs against one database don't collide.
pub fn unique(prefix: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}-{nanos}")
}
