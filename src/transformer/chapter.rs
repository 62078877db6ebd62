use serde::{Deserialize, Serialize};

use crate::models::chapter::Chapter;
use super::document::{DocOutput, doc_transform};
use super::format_time;

/// Chapter response record.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ChapterOutput {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub level: i64,
    pub sort: i64,
    pub doc_id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub doc: DocOutput,
}

pub fn chapter_transform(chapter: &Chapter) -> ChapterOutput {
    ChapterOutput {
        id: chapter.id,
        name: chapter.name.clone(),
        title: chapter.title.clone(),
        description: chapter.description.clone(),
        level: chapter.level,
        sort: chapter.sort,
        doc_id: chapter.doc_id,
        created_at: format_time(&chapter.created_at),
        updated_at: format_time(&chapter.updated_at),
        doc: chapter.doc.as_ref().map(doc_transform).unwrap_or_default(),
    }
}

pub fn chapters_transform(chapters: &[Chapter]) -> Vec<ChapterOutput> {
    chapters.iter().map(chapter_transform).collect()
}
