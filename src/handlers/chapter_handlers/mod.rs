pub mod crud;
pub mod helpers;
pub mod list;

pub use crud::{read, create, update, delete};
pub use list::list;

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{HttpRequest, web};

use crate::handlers::api_resource::ApiResource;

/// Register the chapter admin routes.
///
/// Expects a `web::Data<dyn ChapterRepository>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/chapters")
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/", web::post().to(create))
            .route("/{id}", web::get().to(read))
            .route("/{id}/update", web::post().to(update))
            .route("/{id}/delete", web::delete().to(delete))
    );
}

/// Listing answers 200 even when the query string cannot be decoded.
fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Bad list query: {}", err);
    let resp = ApiResource::empty(err.to_string()).ok();
    InternalError::from_response(err, resp).into()
}
