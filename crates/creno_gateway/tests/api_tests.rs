// Integration tests for BookingApi against a mocked booking backend.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use creno_common::{CrenoError, HttpStatusCode};
use creno_gateway::{BookingApi, FetchOutcome, GatewayError};

fn api_for(server: &MockServer) -> BookingApi {
    BookingApi::new(server.uri(), reqwest::Client::new())
}

#[tokio::test]
async fn list_services_decodes_the_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "s1", "name": "Haircut", "description": "Classic cut", "duration": 30},
            {"id": "s2", "name": "Massage"}
        ])))
        .mount(&server)
        .await;

    let outcome = api_for(&server).list_services().await;
    let services = outcome.fetched().expect("fetch should succeed");
    assert_eq!(services.len(), 2);
    assert_eq!(services[0].id, "s1");
    assert_eq!(services[0].description.as_deref(), Some("Classic cut"));
    assert_eq!(services[0].duration, 30);
    // omitempty fields default instead of failing the decode
    assert_eq!(services[1].description, None);
    assert_eq!(services[1].duration, 0);
}

#[tokio::test]
async fn successful_empty_collection_is_not_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let outcome = api_for(&server).list_services().await;
    assert_eq!(outcome, FetchOutcome::Fetched(vec![]));
    assert!(!outcome.is_failed());
}

#[tokio::test]
async fn non_success_status_degrades_to_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/s1/slots"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let outcome = api_for(&server).list_slots("s1").await;
    assert!(outcome.is_failed());
}

#[tokio::test]
async fn undecodable_body_degrades_to_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let outcome = api_for(&server).list_services().await;
    assert!(outcome.is_failed());
}

#[tokio::test]
async fn transport_failure_degrades_to_failed() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let api = BookingApi::new(format!("http://{}", addr), reqwest::Client::new());
    let outcome = api.list_services().await;
    assert!(outcome.is_failed());
}

#[tokio::test]
async fn my_reservations_forwards_the_identity_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reservations/me"))
        .and(header("X-User-Email", "user@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "r1", "slotId": "sl1", "createdAt": "2023-12-01"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = api_for(&server).my_reservations("user@example.com").await;
    let reservations = outcome.fetched().expect("fetch should succeed");
    assert_eq!(reservations[0].slot_id, "sl1");
    assert_eq!(reservations[0].created_at.as_deref(), Some("2023-12-01"));
}

#[tokio::test]
async fn login_posts_the_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "user@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "user@example.com"})))
        .mount(&server)
        .await;

    let response = api_for(&server)
        .login("user@example.com")
        .await
        .expect("login should succeed");
    assert_eq!(response.email, "user@example.com");
}

#[tokio::test]
async fn book_returns_the_created_reservation_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reservations"))
        .and(header("X-User-Email", "user@example.com"))
        .and(body_json(json!({"slotId": "sl1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "r42"})))
        .mount(&server)
        .await;

    let created = api_for(&server)
        .book("sl1", "user@example.com")
        .await
        .expect("booking should succeed");
    assert_eq!(created.id, "r42");
}

#[tokio::test]
async fn book_surfaces_the_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reservations"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "slot is full"})))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .book("sl1", "user@example.com")
        .await
        .expect_err("booking should fail");
    match &err {
        GatewayError::Api {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, 409);
            assert_eq!(message, "slot is full");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // The logical failure keeps its status through the common error type.
    assert_eq!(err.status_code(), 409);
    let common: CrenoError = err.into();
    assert!(matches!(common, CrenoError::ExternalServiceError { .. }));
}

#[tokio::test]
async fn book_falls_back_to_the_raw_body_when_error_is_not_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reservations"))
        .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .book("sl1", "user@example.com")
        .await
        .expect_err("booking should fail");
    assert_eq!(err.server_message(), Some("gateway exploded"));
}

#[tokio::test]
async fn cancel_ignores_the_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/reservations/r1"))
        .and(header("X-User-Email", "user@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    api_for(&server)
        .cancel("r1", "user@example.com")
        .await
        .expect("cancel should succeed");
}

#[tokio::test]
async fn cancel_surfaces_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/reservations/ghost"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "reservation not found"})),
        )
        .mount(&server)
        .await;

    let err = api_for(&server)
        .cancel("ghost", "user@example.com")
        .await
        .expect_err("cancel should fail");
    assert_eq!(err.server_message(), Some("reservation not found"));
}

#[tokio::test]
async fn admin_creates_forward_identity_and_decode_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/services"))
        .and(header("X-User-Email", "admin@example.com"))
        .and(body_json(json!({
            "name": "Massage",
            "description": "Relaxing",
            "duration": 45
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "s9"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/services/s9/slots"))
        .and(header("X-User-Email", "admin@example.com"))
        .and(body_json(json!({
            "datetime": "2025-01-01T10:00:00Z",
            "capacity": 2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "sl7"})))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let service = api
        .create_service("Massage", "Relaxing", 45, "admin@example.com")
        .await
        .expect("service creation should succeed");
    assert_eq!(service.id, "s9");

    let slot = api
        .create_slot("s9", "2025-01-01T10:00:00Z", 2, "admin@example.com")
        .await
        .expect("slot creation should succeed");
    assert_eq!(slot.id, "sl7");
}
