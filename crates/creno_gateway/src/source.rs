// --- File: crates/creno_gateway/src/source.rs ---
//! The trait seam between the gateway and the catalog builder.
//!
//! The builder only ever sees this trait, which decouples it from the real
//! HTTP client and lets tests drive it with in-memory stubs.

use std::future::Future;
use std::pin::Pin;

use crate::client::BookingApi;
use crate::models::{Service, Slot};
use crate::outcome::FetchOutcome;

/// Type alias for a boxed future, for dyn-safe async trait methods
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A source of services and their slots.
pub trait SlotSource: Send + Sync {
    /// Fetch the list of all services.
    fn list_services(&self) -> BoxFuture<'_, FetchOutcome<Vec<Service>>>;

    /// Fetch the slots owned by one service.
    fn list_slots<'a>(&'a self, service_id: &'a str) -> BoxFuture<'a, FetchOutcome<Vec<Slot>>>;
}

impl SlotSource for BookingApi {
    fn list_services(&self) -> BoxFuture<'_, FetchOutcome<Vec<Service>>> {
        Box::pin(BookingApi::list_services(self))
    }

    fn list_slots<'a>(&'a self, service_id: &'a str) -> BoxFuture<'a, FetchOutcome<Vec<Slot>>> {
        Box::pin(BookingApi::list_slots(self, service_id))
    }
}
