use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use review_api::config::EnvConfig;
use review_api::db::sqlite_service::SqliteService;
use review_api::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let service = match SqliteService::new(&config.db_path).await {
        Ok(service) => Arc::new(service),
        Err(e) => {
            log::error!("Failed to open sqlite store at {}: {}", config.db_path, e);
            std::process::exit(1);
        }
    };

    println!("Starting server on {}", addr);

    let app_service = Arc::clone(&service);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&app_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await?;

    // The server has shut down and dropped its clones by now.
    if let Ok(service) = Arc::try_unwrap(service) {
        if let Err(e) = service.close().await {
            log::warn!("Error closing sqlite store: {}", e);
        }
    }

    Ok(())
}
