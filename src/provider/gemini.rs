//! Google Gemini `generateContent` client.
//!
//! Configuration comes from [`AppConfig`](crate::config::AppConfig):
//! - `GEMINI_API_KEY` - API key (required for real calls)
//! - `STUDY_HELPER_GEMINI_URL` - Base URL (default: `https://generativelanguage.googleapis.com/v1beta`)

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use study_core::prompts::{ModelRequest, PromptPart};

use super::{ModelProvider, ProviderError};
use crate::config::AppConfig;

// ============================================================
// Wire types
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum Part {
    Text(String),
    InlineData(InlineData),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    status: Option<String>,
}

fn to_wire(request: &ModelRequest) -> GenerateContentRequest {
    let parts = request
        .parts
        .iter()
        .map(|part| match part {
            PromptPart::Text(text) => Part::Text(text.clone()),
            PromptPart::InlineData { mime_type, data } => Part::InlineData(InlineData {
                mime_type: mime_type.clone(),
                data: data.clone(),
            }),
        })
        .collect();

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user"),
            parts,
        }],
        system_instruction: request.system_instruction.as_ref().map(|text| Content {
            role: None,
            parts: vec![Part::Text(text.clone())],
        }),
    }
}

/// Map a non-success HTTP response to a provider error.
fn classify_error(status: StatusCode, body: &str) -> ProviderError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
    let exhausted = detail
        .as_ref()
        .and_then(|d| d.status.as_deref())
        .is_some_and(|s| s == "RESOURCE_EXHAUSTED");
    let message = detail
        .and_then(|d| d.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Gemini API error {}: {}", status, body));

    if status == StatusCode::TOO_MANY_REQUESTS || exhausted {
        ProviderError::RateLimited(message)
    } else {
        ProviderError::Unknown(message)
    }
}

fn response_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!("Model returned no text (blocked: {})", r))
            .unwrap_or_else(|| "Model returned no text".to_string());
        return Err(ProviderError::Unknown(reason));
    }
    Ok(text)
}

/// HTTP client for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl GeminiClient {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.gemini_base_url.clone(), config.gemini_api_key.clone())
    }

    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ModelProvider for GeminiClient {
    async fn generate(&self, request: &ModelRequest) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::Unknown("GEMINI_API_KEY is not set".to_string()))?;

        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&to_wire(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = classify_error(status, &body);
            tracing::warn!("Gemini call to {} failed: {}", request.model, error);
            return Err(error);
        }

        response_text(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use study_core::prompts::Attachment;

    #[test]
    fn wire_request_uses_gemini_field_names() {
        let request = ModelRequest::new("gemini-2.5-flash")
            .system_instruction("be brief")
            .text("hello")
            .attachment(&Attachment::new("image/png", vec![1, 2, 3]));

        let body = serde_json::to_value(to_wire(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        {"text": "hello"},
                        {"inlineData": {"mimeType": "image/png", "data": "AQID"}}
                    ]
                }],
                "systemInstruction": {"parts": [{"text": "be brief"}]}
            })
        );
    }

    #[test]
    fn omits_system_instruction_when_absent() {
        let body = serde_json::to_value(to_wire(&ModelRequest::new("m").text("hi"))).unwrap();
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn too_many_requests_is_rate_limited() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        match classify_error(StatusCode::TOO_MANY_REQUESTS, body) {
            ProviderError::RateLimited(msg) => assert_eq!(msg, "Quota exceeded"),
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }

    #[test]
    fn other_failures_keep_provider_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        match classify_error(StatusCode::BAD_REQUEST, body) {
            ProviderError::Unknown(msg) => assert_eq!(msg, "API key not valid"),
            other => panic!("expected Unknown, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_is_reported_verbatim() {
        match classify_error(StatusCode::BAD_GATEWAY, "upstream down") {
            ProviderError::Unknown(msg) => assert!(msg.contains("upstream down")),
            other => panic!("expected Unknown, got {:?}", other),
        }
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "Hello, "}, {"text": "student"}]}}]
        }))
        .unwrap();
        assert_eq!(response_text(response).unwrap(), "Hello, student");
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        let err = response_text(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }
}
