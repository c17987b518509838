// File: crates/services/creno_front/src/main.rs
use std::sync::Arc;

use creno_config::load_config;
use tokio::net::TcpListener;

mod app_state;
mod handlers;
mod identity;
mod routes;
mod views;

use app_state::AppState;

#[tokio::main]
async fn main() {
    creno_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    tracing::info!("booking backend at {}", config.backend.base_url);

    let state = Arc::new(AppState::new(config.clone()));
    let app = routes::routes(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    println!("Starting front at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
