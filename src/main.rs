#[macro_use]
extern crate diesel;

mod appointment;
mod auth;
mod database;
mod errors;
mod models;
mod protocol;
mod schema;
mod utils;

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use tracing_subscriber::EnvFilter;

use crate::protocol::SimpleResponse;

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(SimpleResponse::ok())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    tracing::info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .service(index)
            // auth
            .service(
                web::scope("/auth")
                    .configure(auth::config),
            )
            // appointments
            .configure(appointment::config)
    })
    .bind(bind)?
    .run()
    .await
}
