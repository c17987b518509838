// --- File: crates/creno_gateway/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod error;
pub mod models;
pub mod outcome;
pub mod source;

// Re-export the types callers use all the time
pub use client::{BookingApi, USER_EMAIL_HEADER};
pub use error::GatewayError;
pub use models::{CreatedId, LoginResponse, Reservation, Service, Slot};
pub use outcome::FetchOutcome;
pub use source::{BoxFuture, SlotSource};
