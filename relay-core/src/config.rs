use anyhow::Result;

/// Default model segment of the generateContent path when GEMINI_MODEL is not set
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default upstream base URL when GEMINI_API_BASE is not set
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default listen address when BIND_ADDR is not set
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret credential, passed to the upstream as a query parameter.
    /// Deliberately not validated here: an empty or wrong key surfaces
    /// as an upstream authentication failure, reported as a generic 500.
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from .env file and environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let api_base =
            std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            api_key,
            model,
            api_base,
            bind_addr,
        })
    }

    /// Full generateContent URL, without the key query parameter.
    /// The key is attached by the caller as `?key=...` so it never
    /// appears in a loggable URL string.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}
