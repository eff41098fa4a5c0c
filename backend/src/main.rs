mod config;
mod error;
mod services;

use crate::config::Config;
use crate::services::templates::catalog::TemplateCatalog;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use env_logger::Env;
use log::info;
use std::fs;

async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Hello from the backend!" }))
}

async fn hello() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Hello from the backend API!" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    // The uploads directory must exist before the first write or static
    // read; creating it is idempotent.
    fs::create_dir_all(&config.upload_dir)?;

    let catalog = web::Data::new(TemplateCatalog::with_defaults());
    let config_data = web::Data::new(config.clone());
    let upload_dir = config.upload_dir.clone();

    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            // The front end is served from a different origin.
            .wrap(Cors::permissive())
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(catalog.clone())
            .app_data(config_data.clone())
            .service(services::templates::configure_routes())
            .service(services::uploads::configure_routes())
            .service(services::instant_edit::configure_routes())
            .service(services::status::configure_routes())
            .route("/", web::get().to(index))
            .route("/api/hello", web::get().to(hello))
            .service(Files::new("/uploads", upload_dir.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
