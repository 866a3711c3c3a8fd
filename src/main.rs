mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{EmployeeStore, PgEmployeeStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|err| {
        error!("could not process environment: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    if let Some(rate_limit) = config.rate_limit {
        info!("rate limit configured at {} requests per second (not enforced)", rate_limit);
    }

    // Initialize the database pool
    let pool = db::create_pool(&config.database).await.map_err(|err| {
        error!("could not connect to postgres at {}:{}: {}", config.database.host, config.database.port, err);
        io::Error::new(io::ErrorKind::ConnectionRefused, err)
    })?;
    let store: Arc<dyn EmployeeStore> = Arc::new(PgEmployeeStore::new(pool));

    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(store.clone()))
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
