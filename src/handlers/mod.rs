pub mod api_resource;
pub mod chapter_handlers;
