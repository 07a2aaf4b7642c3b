use reqwest::StatusCode;

/// Error taxonomy for a single relay invocation.
///
/// Every variant is terminal: nothing is retried or recovered within
/// one call. The web layer decides how much of each variant the caller
/// is allowed to see.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Client error: the request parsed but carried no prompt
    #[error("prompt is required")]
    EmptyPrompt,

    /// The upstream API answered with a non-success status.
    /// The body is kept for server-side logging only and is never
    /// forwarded to the caller.
    #[error("upstream API error {status}")]
    Upstream { status: StatusCode, body: String },

    /// Transport or decode failure talking to the upstream
    #[error("upstream request failed")]
    Http(#[from] reqwest::Error),
}
