// --- File: crates/creno_gateway/src/client.rs ---
//! The `BookingApi` client: every endpoint of the booking REST API, typed.
//!
//! Reads return [`FetchOutcome`]: transport, status and decode failures are
//! absorbed here (logged, never thrown into UI code). Mutations return
//! `Result<_, GatewayError>` so the server's logical error message can be
//! surfaced to the user.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use creno_common::http::client::{create_client, HTTP_CLIENT};
use creno_config::BackendConfig;

use crate::error::GatewayError;
use crate::models::{
    BookRequest, CreateServiceRequest, CreateSlotRequest, CreatedId, LoginRequest, LoginResponse,
    Reservation, Service, Slot,
};
use crate::outcome::FetchOutcome;

/// Header carrying the caller's identity on privileged calls.
pub const USER_EMAIL_HEADER: &str = "X-User-Email";

/// Client for the booking REST API.
pub struct BookingApi {
    /// HTTP client for making requests to the booking API
    client: Client,

    /// Base URL of the API, without a trailing slash
    base_url: String,
}

impl BookingApi {
    /// Creates a new client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Creates a client from the backend section of the app configuration.
    pub fn from_config(config: &BackendConfig) -> Self {
        let client = create_client(config.timeout_secs, true)
            .unwrap_or_else(|_| HTTP_CLIENT.clone());
        Self::new(config.base_url.clone(), client)
    }

    fn request(&self, method: Method, path: &str, email: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);
        if let Some(email) = email {
            request = request.header(USER_EMAIL_HEADER, email);
        }
        request
    }

    /// GET a collection, absorbing every failure mode into `Failed`.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        email: Option<&str>,
    ) -> FetchOutcome<T> {
        let response = match self.request(Method::GET, path, email).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("GET {} failed: {}", path, err);
                return FetchOutcome::Failed;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned status {}", path, status);
            return FetchOutcome::Failed;
        }

        match response.json::<T>().await {
            Ok(value) => FetchOutcome::Fetched(value),
            Err(err) => {
                warn!("GET {} returned an undecodable body: {}", path, err);
                FetchOutcome::Failed
            }
        }
    }

    /// Sends a mutating request and decodes the 2xx body, or extracts the
    /// server's `{error}` message into [`GatewayError::Api`].
    async fn send_expecting<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        email: Option<&str>,
        body: &impl Serialize,
    ) -> Result<T, GatewayError> {
        let request = self.request(method, path, email).json(body);

        let response = request.send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        debug!("{} responded with status {}", path, status);
        if status.is_success() {
            Ok(serde_json::from_str(&body_text)?)
        } else {
            Err(GatewayError::Api {
                status_code: status.as_u16(),
                message: extract_error_message(&body_text),
            })
        }
    }

    // --- Reads ---

    /// `GET /services`
    pub async fn list_services(&self) -> FetchOutcome<Vec<Service>> {
        self.fetch_json("/services", None).await
    }

    /// `GET /services/{id}/slots`
    pub async fn list_slots(&self, service_id: &str) -> FetchOutcome<Vec<Slot>> {
        self.fetch_json(&format!("/services/{}/slots", service_id), None)
            .await
    }

    /// `GET /reservations/me`
    pub async fn my_reservations(&self, email: &str) -> FetchOutcome<Vec<Reservation>> {
        self.fetch_json("/reservations/me", Some(email)).await
    }

    // --- Mutations ---

    /// `POST /auth/login`
    pub async fn login(&self, email: &str) -> Result<LoginResponse, GatewayError> {
        self.send_expecting(
            Method::POST,
            "/auth/login",
            None,
            &LoginRequest { email },
        )
        .await
    }

    /// `POST /reservations`
    pub async fn book(&self, slot_id: &str, email: &str) -> Result<CreatedId, GatewayError> {
        self.send_expecting(
            Method::POST,
            "/reservations",
            Some(email),
            &BookRequest { slot_id },
        )
        .await
    }

    /// `DELETE /reservations/{id}`
    ///
    /// The success body is ignored; only the server's error message matters.
    pub async fn cancel(&self, reservation_id: &str, email: &str) -> Result<(), GatewayError> {
        let path = format!("/reservations/{}", reservation_id);
        let response = self
            .request(Method::DELETE, &path, Some(email))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body_text = response.text().await?;
        Err(GatewayError::Api {
            status_code: status.as_u16(),
            message: extract_error_message(&body_text),
        })
    }

    /// `POST /admin/services`
    pub async fn create_service(
        &self,
        name: &str,
        description: &str,
        duration: i64,
        email: &str,
    ) -> Result<CreatedId, GatewayError> {
        self.send_expecting(
            Method::POST,
            "/admin/services",
            Some(email),
            &CreateServiceRequest {
                name,
                description,
                duration,
            },
        )
        .await
    }

    /// `POST /admin/services/{id}/slots`
    pub async fn create_slot(
        &self,
        service_id: &str,
        datetime: &str,
        capacity: i64,
        email: &str,
    ) -> Result<CreatedId, GatewayError> {
        self.send_expecting(
            Method::POST,
            &format!("/admin/services/{}/slots", service_id),
            Some(email),
            &CreateSlotRequest { datetime, capacity },
        )
        .await
    }
}

/// Pulls the `error` field out of an API error body, falling back to the raw
/// text when the body is not the expected JSON shape.
fn extract_error_message(body_text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body_text) {
        Ok(json_body) => json_body
            .get("error")
            .and_then(|m| m.as_str())
            .unwrap_or(body_text)
            .to_string(),
        Err(_) => body_text.to_string(),
    }
}
