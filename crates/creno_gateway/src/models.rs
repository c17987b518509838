// --- File: crates/creno_gateway/src/models.rs ---
//! Wire models for the booking REST API.
//!
//! Field names on the wire are camelCase; optional fields mirror the
//! server's `omitempty` marshalling, so decoding stays tolerant of
//! minimal payloads.

use serde::{Deserialize, Serialize};

/// A bookable offering (e.g. a type of appointment).
///
/// Created and destroyed only by the admin-facing API; within a session the
/// client treats it as immutable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Duration in minutes. The server may omit it.
    #[serde(default)]
    pub duration: i64,
}

/// A specific bookable time instance belonging to one service.
///
/// The owning service is implicit in the endpoint the slot was fetched from;
/// it is not carried on the object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: String,
    /// RFC3339 datetime, kept as an opaque string. Empty when the server
    /// omitted it.
    #[serde(default)]
    pub datetime: String,
    #[serde(default)]
    pub capacity: i64,
}

/// A booking made by a user against one slot.
///
/// `slot_id` is a weak reference: the owning slot may have vanished or its
/// fetch may have failed, so consumers must tolerate unresolved ids.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    #[serde(default)]
    pub slot_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response carrying the id of a freshly created resource.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreatedId {
    pub id: String,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoginResponse {
    pub email: String,
}

// --- Request bodies ---

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest<'a> {
    pub slot_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateServiceRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub duration: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateSlotRequest<'a> {
    pub datetime: &'a str,
    pub capacity: i64,
}
