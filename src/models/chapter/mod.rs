pub mod types;
pub mod queries;
pub mod repository;

pub use types::*;
pub use repository::{ChapterRepository, PgChapterRepository};
