mod config;
mod db;
mod error;
mod services;
mod state;

use crate::config::ServerConfig;
use crate::db::Database;
use crate::state::AppState;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();

    let db = Database::open(&config.database_url).map_err(|e| {
        error!("Cannot open database {}: {}", config.database_url, e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    let state = AppState::new(db, &config).map_err(|e| {
        error!("Cannot prepare password hashing: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    let state = web::Data::new(state);

    let static_dir = config.static_dir.clone();
    let serve_client = static_dir.is_dir();
    if serve_client {
        info!("Serving web client from {}", static_dir.display());
    } else {
        warn!(
            "No web client at {}; serving the API only (build the frontend or set STATIC_DIR)",
            static_dir.display()
        );
    }

    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(services::configure)
            .configure(move |cfg| {
                if serve_client {
                    cfg.service(Files::new("/", static_dir).index_file("index.html"));
                } else {
                    cfg.route("/", web::get().to(services::health));
                }
            })
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
