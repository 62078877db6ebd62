use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::handlers::api_resource::ApiResource;
use crate::models::chapter::{ChapterFilter, ChapterRepository, SortSpec};
use crate::transformer::chapters_transform;
use super::helpers::parse_int;

/// Build the listing filter from raw query parameters.
/// Query params: offset (page, default 1), limit (default 20), searchStr,
/// docId (default 0 = all documents), orderBy.
pub fn filter_from_query(query: &HashMap<String, String>) -> ChapterFilter {
    let param = |key: &str| query.get(key).map(String::as_str);

    ChapterFilter {
        page: parse_int(param("offset"), 1),
        limit: parse_int(param("limit"), 20),
        search: param("searchStr").unwrap_or("").to_string(),
        doc_id: parse_int(param("docId"), 0).max(0),
        sort: SortSpec::parse(param("orderBy").unwrap_or("")),
    }
}

/// GET /admin/chapters
///
/// A failed listing is logged and answered like an empty one.
pub async fn list(
    repo: web::Data<dyn ChapterRepository>,
    query: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    let filter = filter_from_query(&query);
    log::debug!("docId:{}", filter.doc_id);

    let chapters = match repo.find_all(&filter).await {
        Ok(chapters) => chapters,
        Err(e) => {
            log::warn!("Listing chapters failed, answering with an empty list: {e}");
            Vec::new()
        }
    };

    ApiResource::success(chapters_transform(&chapters)).ok()
}
