//! Output-facing shapes for stored records.
//!
//! Each record type has an explicit mapping function; timestamps are
//! rendered with [`format_time`].

pub mod chapter;
pub mod document;

pub use chapter::{ChapterOutput, chapter_transform, chapters_transform};
pub use document::{DocOutput, doc_transform};

use chrono::{DateTime, SecondsFormat, Utc};

/// RFC 3339 at second precision, `Z` for UTC: `2024-03-01T08:30:00Z`.
pub fn format_time(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
