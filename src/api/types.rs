//! Request and response bodies.
//!
//! Inputs are lenient: every field is optional, and list fields read `null` as empty, so
//! that a missing field is reported by the handler with its own message rather than as a
//! JSON rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use study_core::models::{
    coerce, ChatSession, ExamPrepResult, FlashcardSet, HistoryMessage, ModelOption,
    ParsedNotesResult, StudyPoint, TopicGraph,
};

/// Trimmed, non-empty text or `None`.
pub fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// ============================================================
// Inputs
// ============================================================

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatInput {
    pub message: Option<String>,
    #[serde(deserialize_with = "coerce::list")]
    pub conversation_history: Vec<HistoryMessage>,
    pub model_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratePdfInput {
    pub text: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateFlashcardsInput {
    pub topic: Option<String>,
    pub description: Option<String>,
    pub model_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyModeInput {
    pub topic: Option<String>,
    pub material: Option<String>,
    pub model_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyPointsInput {
    pub topic: Option<String>,
    pub material: Option<String>,
    pub point_count: Option<usize>,
    pub model_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluateAnswerInput {
    pub question: Option<String>,
    pub user_answer: Option<String>,
    pub topic: Option<String>,
    pub model_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamPrepInput {
    pub syllabus: Option<String>,
    pub pyqs: Option<String>,
    pub model_id: Option<String>,
}

/// Only the question of each card is used, as a hint for the concept map.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardHint {
    #[serde(deserialize_with = "coerce::text")]
    pub question: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicGraphInput {
    pub topic: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::list")]
    pub flashcards: Vec<FlashcardHint>,
    pub model_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSessionInput {
    pub title: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionMessageInput {
    pub message: Option<String>,
    pub model_id: Option<String>,
}

// ============================================================
// Responses
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelsResponse {
    pub models: &'static [ModelOption],
    pub default_model: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPdfResponse {
    pub success: bool,
    pub processed_text: String,
    pub workflow: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandwrittenPdfResponse {
    pub success: bool,
    pub processed_text: String,
    pub pdf_base64: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessNotesResponse {
    pub success: bool,
    #[serde(flatten)]
    pub notes: ParsedNotesResult,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub deck: FlashcardSet,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyModeResponse {
    pub success: bool,
    pub teaching_point: String,
    pub question: String,
    pub topic: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPointsResponse {
    pub success: bool,
    pub points: Vec<StudyPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswerResponse {
    pub success: bool,
    pub feedback: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamPrepResponse {
    pub success: bool,
    pub result: ExamPrepResult,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicGraphResponse {
    pub success: bool,
    pub topic: String,
    pub visualization: TopicGraph,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMessageResponse {
    pub success: bool,
    pub message: String,
    pub model: String,
    pub session: ChatSession,
}
