//! The model provider seam.
//!
//! Handlers only see [`ModelProvider`]: one request in, the model's text out. Rate limiting
//! is reported separately from every other failure because clients surface it differently
//! (HTTP 429 with `quotaExceeded`).

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use study_core::prompts::ModelRequest;
use thiserror::Error;

/// Provider failures.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider refused the call because a quota or rate limit was hit.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Anything else. Carries the provider's message when it sent one.
    #[error("{0}")]
    Unknown(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.status() == Some(reqwest::StatusCode::TOO_MANY_REQUESTS) {
            Self::RateLimited(e.to_string())
        } else {
            Self::Unknown(e.to_string())
        }
    }
}

/// A hosted model that turns a prompt into free-form text.
///
/// Implementations make exactly one outbound call per `generate` and never retry.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn generate(&self, request: &ModelRequest) -> Result<String, ProviderError>;
}
