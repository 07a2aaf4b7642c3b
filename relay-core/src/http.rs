//! Shared HTTP client
//!
//! One lazily-initialized reqwest client for all upstream calls, so
//! concurrent invocations share a connection pool. No timeout override:
//! the upstream call is awaited as one unit with the client defaults.

use reqwest::Client;
use std::sync::OnceLock;

/// Global HTTP client for upstream API calls
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(concat!("gemini-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}
