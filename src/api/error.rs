//! HTTP error mapping.
//!
//! Every failure leaves the API as `{ "success": false, "error": "..." }`, plus
//! `"quotaExceeded": true` when the provider rate-limited us.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use study_core::parser::MalformedModelOutput;
use thiserror::Error;

use crate::provider::ProviderError;

pub const QUOTA_EXCEEDED_MESSAGE: &str = "API quota exceeded. Please wait a moment and try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("File too large. Max {limit_mb}MB allowed.")]
    PayloadTooLarge { limit_mb: usize },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("{context}: {source}")]
    Parse {
        context: &'static str,
        #[source]
        source: MalformedModelOutput,
    },

    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    quota_exceeded: bool,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Wrap a parser failure with a message naming what could not be read.
    pub fn parse(context: &'static str) -> impl FnOnce(MalformedModelOutput) -> Self {
        move |source| Self::Parse { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Provider(ProviderError::RateLimited(_)) => StatusCode::TOO_MANY_REQUESTS,
            Self::Provider(_) | Self::Parse { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Provider(ProviderError::RateLimited(_)) => QUOTA_EXCEEDED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Map a failure while reading multipart fields.
    pub fn multipart(error: MultipartError, limit_mb: usize) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge { limit_mb }
        } else {
            Self::BadRequest(error.body_text())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Provider(e) => tracing::error!("Provider error: {}", e),
            Self::Parse { .. } => tracing::error!("Parse error: {}", self),
            e if status.is_server_error() => tracing::error!("Internal error: {}", e),
            e => tracing::warn!("Request rejected ({}): {}", status.as_u16(), e),
        }

        let body = ErrorBody {
            success: false,
            error: self.message(),
            quota_exceeded: matches!(self, Self::Provider(ProviderError::RateLimited(_))),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_maps_to_429() {
        let err = ApiError::from(ProviderError::RateLimited("quota".into()));
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.message(), QUOTA_EXCEEDED_MESSAGE);
    }

    #[test]
    fn other_provider_errors_surface_their_message() {
        let err = ApiError::from(ProviderError::Unknown("API key not valid".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "API key not valid");
    }

    #[test]
    fn quota_flag_is_omitted_unless_set() {
        let body = ErrorBody {
            success: false,
            error: "boom".into(),
            quota_exceeded: false,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("quotaExceeded").is_none());
    }

    #[test]
    fn parse_errors_carry_the_parser_message() {
        let err = ApiError::parse("Failed to parse flashcards from AI response")(
            MalformedModelOutput::MissingArray("flashcards"),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.message(),
            "Failed to parse flashcards from AI response: model response is missing the `flashcards` array"
        );
    }

    #[test]
    fn payload_message_names_the_limit() {
        let err = ApiError::PayloadTooLarge { limit_mb: 8 };
        assert_eq!(err.to_string(), "File too large. Max 8MB allowed.");
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
