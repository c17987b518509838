// --- File: crates/services/creno_front/src/identity.rs ---
//! Identity cookie plumbing.
//!
//! The logged-in email lives in a plain cookie. There is no session secret;
//! the email is forwarded as-is to the backend, which owns the trust
//! boundary.

use axum::http::{header, HeaderMap};

/// Cookie holding the logged-in email.
pub const EMAIL_COOKIE: &str = "creno_email";

/// Extracts the logged-in email from the request's cookies, if any.
pub fn email_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == EMAIL_COOKIE && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// The `Set-Cookie` value storing `email` for the rest of the session.
pub fn login_cookie(email: &str) -> String {
    format!("{}={}; Path=/; SameSite=Lax", EMAIL_COOKIE, email)
}
