use serde::{Deserialize, Serialize};

use crate::models::document::Document;
use super::format_time;

/// Document as nested inside a chapter response.
///
/// `Default` is the zero value used when a chapter has no loaded document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DocOutput {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

pub fn doc_transform(doc: &Document) -> DocOutput {
    DocOutput {
        id: doc.id,
        name: doc.name.clone(),
        title: doc.title.clone(),
        description: doc.description.clone(),
        created_at: format_time(&doc.created_at),
        updated_at: format_time(&doc.updated_at),
    }
}
