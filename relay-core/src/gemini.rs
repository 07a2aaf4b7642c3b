//! Gemini generateContent client
//!
//! One outbound HTTPS call per invocation: build the payload, post it
//! with the secret key as a query parameter, unwrap the nested response.

use crate::config::Config;
use crate::error::RelayError;
use crate::http::get_client;
use crate::models::{GenerateContentRequest, GenerateContentResponse};
use std::time::Instant;
use tracing::{info, warn};

/// Placeholder answer when the upstream response carries no
/// `candidates[0].content.parts[0].text` chain
pub const FALLBACK_TEXT: &str = "no answer available";

/// Forward a prompt to the Gemini API and return the extracted text.
///
/// The prompt is embedded verbatim, with no length limit and no
/// filtering. A response missing the nested text field at any level
/// yields [`FALLBACK_TEXT`] rather than an error.
pub async fn generate_content(prompt: &str, config: &Config) -> Result<String, RelayError> {
    if prompt.is_empty() {
        return Err(RelayError::EmptyPrompt);
    }

    let client = get_client();
    let start = Instant::now();

    let payload = GenerateContentRequest::from_prompt(prompt);

    let response = client
        .post(config.endpoint_url())
        .query(&[("key", config.api_key.as_str())])
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(
            status = %status,
            duration_ms = %duration_ms,
            body = %body,
            "Gemini API error"
        );
        return Err(RelayError::Upstream { status, body });
    }

    let parsed: GenerateContentResponse = response.json().await?;
    let text = parsed.first_text().unwrap_or(FALLBACK_TEXT).to_string();

    info!(
        model = %config.model,
        duration_ms = %duration_ms,
        "Gemini call completed"
    );

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BIND_ADDR;

    #[tokio::test]
    async fn empty_prompt_is_rejected_before_any_network_call() {
        // Unroutable base: reaching the network would fail differently
        let config = Config {
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            api_base: "http://192.0.2.1".to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        };
        let result = generate_content("", &config).await;
        assert!(matches!(result, Err(RelayError::EmptyPrompt)));
    }
}
