use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::document::Document;

/// Chapter as stored, with its parent document when it was loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub level: i64,
    pub sort: i64,
    pub doc_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub doc: Option<Document>,
}

/// JSON body accepted by create and update.
///
/// Every field defaults so that a missing field reaches validation
/// instead of failing the decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChapterForm {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub level: i64,
    pub sort: i64,
    pub doc_id: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SortDir { Asc, #[default] Desc }

/// Ordering for chapter listings. Only whitelisted columns ever reach SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub column: &'static str,
    pub dir: SortDir,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec { column: "created_at", dir: SortDir::Desc }
    }
}

const SORTABLE: &[&str] = &[
    "id", "name", "title", "level", "sort", "doc_id", "created_at", "updated_at",
];

impl SortSpec {
    /// Parse an `orderBy` value such as `"sort"`, `"name asc"` or
    /// `"created_at desc"`. Unknown columns give the default ordering.
    pub fn parse(order_by: &str) -> Self {
        let mut parts = order_by.split_whitespace();
        let Some(col) = parts.next() else {
            return SortSpec::default();
        };
        let col = col.to_ascii_lowercase();
        let Some(column) = SORTABLE.iter().copied().find(|c| *c == col) else {
            return SortSpec::default();
        };
        let dir = match parts.next().map(|d| d.to_ascii_lowercase()).as_deref() {
            Some("asc") => SortDir::Asc,
            _ => SortDir::Desc,
        };
        SortSpec { column, dir }
    }

    pub fn dir_str(&self) -> &'static str {
        match self.dir { SortDir::Asc => "ASC", SortDir::Desc => "DESC" }
    }
}

/// Filters and paging for the chapter listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterFilter {
    /// 0 means every document.
    pub doc_id: i64,
    pub search: String,
    pub sort: SortSpec,
    /// 1-based page number; values <= 0 disable the offset.
    pub page: i64,
    /// Values <= 0 disable the limit.
    pub limit: i64,
}

impl Default for ChapterFilter {
    fn default() -> Self {
        ChapterFilter {
            doc_id: 0,
            search: String::new(),
            sort: SortSpec::default(),
            page: 1,
            limit: 20,
        }
    }
}

impl ChapterFilter {
    /// Rows to skip for the current page. Saturates at `i64::MAX` for
    /// pages past the end of any table.
    pub fn offset(&self) -> i64 {
        if self.page > 0 && self.limit > 0 {
            (self.page - 1).saturating_mul(self.limit)
        } else {
            0
        }
    }
}
