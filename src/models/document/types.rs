use chrono::{DateTime, Utc};

/// Parent document a chapter belongs to.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Document {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a document.
#[derive(Debug, Clone, Default)]
pub struct NewDocument {
    pub name: String,
    pub title: String,
    pub description: String,
}
