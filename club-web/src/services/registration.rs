//! Registration endpoint client over `gloo-net`.

use gloo_net::http::Request;
use lib_intake::{RegistrationTransport, SubmissionError};
use shared::{ErrorResponse, RegistrationRequest};

/// Shown when a rejection carries no readable `{ "error": ... }` body.
pub const FALLBACK_ERROR: &str = "Failed to register";

#[derive(Debug, Clone, Copy)]
pub struct GlooTransport {
    url: &'static str,
}

impl GlooTransport {
    pub fn new(url: &'static str) -> Self {
        Self { url }
    }
}

impl RegistrationTransport for GlooTransport {
    async fn send(&self, request: &RegistrationRequest) -> Result<(), SubmissionError> {
        let response = Request::post(self.url)
            .json(request)
            .map_err(|e| SubmissionError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.ok();
        Err(SubmissionError::Rejected {
            status,
            message: rejection_message(body.as_deref()),
        })
    }
}

/// Pull the `error` field out of a failure body.
pub fn rejection_message(body: Option<&str>) -> String {
    body.and_then(|b| serde_json::from_str::<ErrorResponse>(b).ok())
        .map(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}
