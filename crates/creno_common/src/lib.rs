// --- File: crates/creno_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod escape; // HTML escaping for untrusted text
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, not_found, validation_error, CrenoError,
    HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

// Re-export the escaping entry point; every crate that builds markup needs it
pub use escape::escape_html;
