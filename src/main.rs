use dotenvy::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use tracing::info;

use mergington_api::database::schema;
use mergington_api::services::seed_service;
use mergington_api::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let db_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://activities.db".to_string());
    info!("Connecting to database: {}", db_url);

    let options = SqliteConnectOptions::from_str(&db_url)
        .expect("DATABASE_URL is not a valid sqlite connection string")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Could not connect to the database");

    schema::init_db(&pool)
        .await
        .expect("Could not create the schema");
    seed_service::ensure_catalog(&pool)
        .await
        .expect("Could not seed the activity catalog");

    let app = web::app(pool);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Could not parse host/port");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Could not bind listener");
    info!("Mergington High School API listening on http://{}", addr);

    axum::serve(listener, app).await.unwrap();
}
