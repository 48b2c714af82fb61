mod db;
mod errors;
mod handlers;
mod models;
mod reporting;
mod store;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use store::memory::MemStore;
use store::postgres::PgStore;
use store::EmployeeStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Postgres when configured, in-memory otherwise (dev mode).
    let store: Arc<dyn EmployeeStore> = match env::var("DATABASE_URL") {
        Ok(database_url) => Arc::new(PgStore::new(db::create_pool(&database_url).await)),
        Err(_) => {
            info!("DATABASE_URL not set, serving from the in-memory store");
            Arc::new(MemStore::new())
        }
    };

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(store.clone()))
            .configure(handlers::routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
