// --- File: crates/services/creno_front/src/routes.rs ---
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::{
    admin_create_service, admin_create_slot, book, cancel, home, login, my_reservations,
    reload_services, services,
};

/// Creates the router containing all front routes.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login", post(login))
        .route("/services", get(services))
        .route("/services/reload", post(reload_services))
        .route("/reservations", get(my_reservations).post(book))
        .route("/reservations/{id}/cancel", post(cancel))
        .route("/admin/services", post(admin_create_service))
        .route("/admin/slots", post(admin_create_slot))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
