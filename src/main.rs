use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use blog_admin::config::AppConfig;
use blog_admin::db;
use blog_admin::handlers::{api_resource::ApiResource, chapter_handlers};
use blog_admin::models::chapter::{ChapterRepository, PgChapterRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool = db::init_pool(&config).await.map_err(std::io::Error::other)?;
    db::run_migrations(&pool).await.map_err(std::io::Error::other)?;

    let repo: Arc<dyn ChapterRepository> = Arc::new(PgChapterRepository::new(pool));
    let repo = web::Data::from(repo);

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .configure(chapter_handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound().json(ApiResource::empty("Not Found"))
            }))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
