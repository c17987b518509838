// --- File: crates/services/creno_front/src/handlers.rs ---
use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use creno_catalog::render_reservations;
use creno_gateway::FetchOutcome;

use crate::app_state::AppState;
use crate::identity::{email_from_headers, login_cookie};
use crate::views;

// --- Form payloads ---
//
// Numeric fields arrive as text and empty inputs still submit, so they are
// kept as strings and parsed with permissive fallbacks.

#[derive(Deserialize, Debug)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize, Debug)]
pub struct BookForm {
    #[serde(default)]
    pub slot_id: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateServiceForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Deserialize, Debug)]
pub struct CreateSlotForm {
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub datetime: String,
    #[serde(default)]
    pub capacity: String,
}

fn message(who: Option<&str>, text: &str) -> Response {
    Html(views::message_page(who, text)).into_response()
}

/// `GET /`
pub async fn home(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let who = email_from_headers(&headers);
    let is_admin = who.as_deref().is_some_and(|email| state.is_admin(email));
    Html(views::home_page(who.as_deref(), is_admin))
}

/// `POST /login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let who = email_from_headers(&headers);
    let email = form.email.trim();
    if email.is_empty() {
        return message(who.as_deref(), "Entre un email");
    }

    match state.api.login(email).await {
        Ok(response) => {
            info!("logged in as {}", response.email);
            (
                [(header::SET_COOKIE, login_cookie(&response.email))],
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(err) => {
            warn!("login failed: {}", err);
            let text = err.server_message().unwrap_or("Erreur de connexion");
            message(who.as_deref(), text)
        }
    }
}

/// `GET /services`
///
/// Lists the services and the slot catalog; the catalog comes from the cache
/// and is only built when the cache is empty.
pub async fn services(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Html<String> {
    let who = email_from_headers(&headers);
    match state.api.list_services().await {
        FetchOutcome::Fetched(services) => {
            let catalog = state.catalog.ensure(&state.api).await;
            Html(views::services_page(who.as_deref(), &services, &catalog))
        }
        FetchOutcome::Failed => Html(views::services_error_page(who.as_deref())),
    }
}

/// `POST /services/reload`
///
/// The explicit reload action: drop the cached catalog, then land back on
/// the services page, whose `ensure` performs the rebuild.
pub async fn reload_services(State(state): State<Arc<AppState>>) -> Redirect {
    state.catalog.invalidate().await;
    Redirect::to("/services")
}

/// `GET /reservations`
pub async fn my_reservations(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let Some(email) = email_from_headers(&headers) else {
        return message(None, "Connecte-toi");
    };

    let catalog = state.catalog.ensure(&state.api).await;
    let reservations = match state.api.my_reservations(&email).await {
        FetchOutcome::Fetched(reservations) => reservations,
        // A failed fetch renders the same placeholder as an empty list.
        FetchOutcome::Failed => Vec::new(),
    };

    let records = render_reservations(&reservations, &catalog);
    Html(views::reservations_page(Some(&email), &records)).into_response()
}

/// `POST /reservations`
pub async fn book(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<BookForm>,
) -> Response {
    let Some(email) = email_from_headers(&headers) else {
        return message(None, "Connecte-toi");
    };
    let slot_id = form.slot_id.trim();
    if slot_id.is_empty() {
        return message(Some(&email), "Slot ID requis");
    }

    match state.api.book(slot_id, &email).await {
        Ok(created) => message(Some(&email), &format!("Réservation OK: {}", created.id)),
        Err(err) => {
            warn!("booking {} failed: {}", slot_id, err);
            let text = err.server_message().unwrap_or("Erreur réservation");
            message(Some(&email), text)
        }
    }
}

/// `POST /reservations/{id}/cancel`
pub async fn cancel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(reservation_id): Path<String>,
) -> Response {
    let Some(email) = email_from_headers(&headers) else {
        return message(None, "Connecte-toi");
    };

    match state.api.cancel(&reservation_id, &email).await {
        Ok(()) => message(Some(&email), "Annulée"),
        Err(err) => {
            warn!("cancelling {} failed: {}", reservation_id, err);
            let text = err.server_message().unwrap_or("Erreur annulation");
            message(Some(&email), text)
        }
    }
}

/// `POST /admin/services`
pub async fn admin_create_service(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<CreateServiceForm>,
) -> Response {
    let who = email_from_headers(&headers);
    let Some(email) = who.as_deref().filter(|email| state.is_admin(email)) else {
        let text = format!(
            "Action admin: connecte-toi en {}",
            state.config.admin_email
        );
        return message(who.as_deref(), &text);
    };

    let name = form.name.trim();
    if name.is_empty() {
        return message(Some(email), "Nom requis");
    }
    let duration = form.duration.trim().parse::<i64>().unwrap_or(0);

    match state
        .api
        .create_service(name, form.description.trim(), duration, email)
        .await
    {
        Ok(created) => message(Some(email), &format!("Service créé: {}", created.id)),
        Err(err) => {
            warn!("service creation failed: {}", err);
            message(Some(email), err.server_message().unwrap_or("Erreur"))
        }
    }
}

/// `POST /admin/slots`
pub async fn admin_create_slot(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<CreateSlotForm>,
) -> Response {
    let who = email_from_headers(&headers);
    let Some(email) = who.as_deref().filter(|email| state.is_admin(email)) else {
        let text = format!(
            "Action admin: connecte-toi en {}",
            state.config.admin_email
        );
        return message(who.as_deref(), &text);
    };

    let service_id = form.service_id.trim();
    let datetime = form.datetime.trim();
    if service_id.is_empty() || datetime.is_empty() {
        return message(Some(email), "Service ID + Datetime requis");
    }
    let capacity = form.capacity.trim().parse::<i64>().unwrap_or(1);

    match state
        .api
        .create_slot(service_id, datetime, capacity, email)
        .await
    {
        Ok(created) => message(
            Some(email),
            &format!("Créneau ajouté. Slot ID: {}", created.id),
        ),
        Err(err) => {
            warn!("slot creation failed: {}", err);
            message(Some(email), err.server_message().unwrap_or("Erreur"))
        }
    }
}
