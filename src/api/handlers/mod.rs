use axum::{
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection, Multipart, Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use uuid::Uuid;

use study_core::models::{
    model_options, ChatSession, ChatSessionSummary, ExamPrepResult, WorkflowDescriptor,
    WorkflowId, DEFAULT_POINT_COUNT,
};
use study_core::parser;
use study_core::prompts::{self, Attachment};
use study_core::workflows;

use super::error::ApiError;
use super::types::*;
use super::AppState;
use crate::config::AppConfig;
use crate::pdf;

/// File name offered for `generate-pdf` downloads.
const GENERATED_PDF_FILENAME: &str = "processed-notes.pdf";

// ============================================================
// Uploads
// ============================================================

struct UploadedFile {
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl UploadedFile {
    fn into_attachment(self) -> Attachment {
        Attachment::from_upload(self.content_type.as_deref(), self.bytes)
    }
}

#[derive(Default)]
struct Upload {
    file: Option<UploadedFile>,
    workflow_id: Option<String>,
    model_id: Option<String>,
}

/// Drain the multipart form, counting file bytes as they arrive so an oversized upload is
/// rejected without being buffered in full.
async fn read_upload(mut multipart: Multipart, config: &AppConfig) -> Result<Upload, ApiError> {
    let max_bytes = config.max_upload_bytes;
    let limit_mb = config.max_upload_mb();
    let mut upload = Upload::default();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::multipart(e, limit_mb))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let content_type = field.content_type().map(str::to_string);
                let mut bytes = Vec::new();
                while let Some(chunk) = field
                    .chunk()
                    .await
                    .map_err(|e| ApiError::multipart(e, limit_mb))?
                {
                    if bytes.len() + chunk.len() > max_bytes {
                        return Err(ApiError::PayloadTooLarge { limit_mb });
                    }
                    bytes.extend_from_slice(&chunk);
                }
                if !bytes.is_empty() {
                    upload.file = Some(UploadedFile {
                        content_type,
                        bytes,
                    });
                }
            }
            "workflowId" | "modelId" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::multipart(e, limit_mb))?;
                let value = Some(value.trim().to_string()).filter(|v| !v.is_empty());
                if name == "workflowId" {
                    upload.workflow_id = value;
                } else {
                    upload.model_id = value;
                }
            }
            other => tracing::debug!("Ignoring multipart field {:?}", other),
        }
    }

    Ok(upload)
}

fn require_file(upload: &mut Upload) -> Result<UploadedFile, ApiError> {
    upload
        .file
        .take()
        .ok_or_else(|| ApiError::bad_request("No file provided"))
}

/// The document prompt for a workflow id, falling back to text extraction for unknown ids.
fn document_workflow(workflow_id: &str) -> (&'static str, &'static str) {
    if let Err(e) = workflows::get_workflow(workflow_id) {
        tracing::warn!("{}; falling back to text extraction", e);
    }
    (
        workflows::get_prompt(workflow_id),
        workflows::get_workflow_name(workflow_id),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Catalog
// ============================================================

pub async fn list_workflows() -> Json<&'static [WorkflowDescriptor]> {
    Json(workflows::get_all_workflows())
}

pub async fn get_workflow(
    Path(id): Path<String>,
) -> Result<Json<&'static WorkflowDescriptor>, ApiError> {
    workflows::get_workflow(&id)
        .map(Json)
        .map_err(|e| ApiError::not_found(e.to_string()))
}

pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: model_options(),
        default_model: state.config.default_model.clone(),
    })
}

// ============================================================
// Chat
// ============================================================

pub async fn chat(
    State(state): State<AppState>,
    input: Result<Json<ChatInput>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(input) = input?;
    let message =
        required(&input.message).ok_or_else(|| ApiError::bad_request("Message is required"))?;
    let model = state.config.model_or_default(input.model_id.as_deref());

    let request = prompts::chat(model, &input.conversation_history, message);
    let reply = state.provider.generate(&request).await?;

    Ok(Json(ChatResponse {
        success: true,
        message: reply,
        model: model.to_string(),
    }))
}

// ============================================================
// Documents
// ============================================================

pub async fn process_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessPdfResponse>, ApiError> {
    let mut upload = read_upload(multipart?, &state.config).await?;
    let file = require_file(&mut upload)?;
    let workflow_id = upload
        .workflow_id
        .ok_or_else(|| ApiError::bad_request("No workflow specified"))?;
    let model = state.config.model_or_default(upload.model_id.as_deref());

    let (prompt, _) = document_workflow(&workflow_id);
    let request = prompts::document(model, prompt, &file.into_attachment());
    let processed_text = state.provider.generate(&request).await?;

    Ok(Json(ProcessPdfResponse {
        success: true,
        processed_text,
        workflow: workflow_id,
    }))
}

pub async fn handwritten_to_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<HandwrittenPdfResponse>, ApiError> {
    let mut upload = read_upload(multipart?, &state.config).await?;
    let file = require_file(&mut upload)?;
    let workflow_id = upload
        .workflow_id
        .ok_or_else(|| ApiError::bad_request("No workflow specified"))?;
    let model = state.config.model_or_default(upload.model_id.as_deref());

    let (prompt, title) = document_workflow(&workflow_id);
    let request = prompts::document(model, prompt, &file.into_attachment());
    let processed_text = state.provider.generate(&request).await?;

    let pdf = pdf::render_pdf(Some(title), &processed_text)
        .map_err(|e| ApiError::Internal(format!("Failed to generate PDF: {}", e)))?;

    Ok(Json(HandwrittenPdfResponse {
        success: true,
        processed_text,
        pdf_base64: STANDARD.encode(pdf),
    }))
}

pub async fn generate_pdf(
    input: Result<Json<GeneratePdfInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = input?;
    let text = input
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("No text provided"))?;

    let pdf = pdf::render_pdf(input.title.as_deref(), text)
        .map_err(|e| ApiError::Internal(format!("Failed to generate PDF: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", GENERATED_PDF_FILENAME),
            ),
        ],
        pdf,
    ))
}

// ============================================================
// Teaching Assistant
// ============================================================

pub async fn process_notes(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessNotesResponse>, ApiError> {
    let mut upload = read_upload(multipart?, &state.config).await?;
    let file = require_file(&mut upload)?;
    let model = state.config.model_or_default(upload.model_id.as_deref());

    let prompt = workflows::descriptor(WorkflowId::TeachingAssistantNotes).prompt;
    let request = prompts::document(model, prompt, &file.into_attachment());
    let reply = state.provider.generate(&request).await?;

    Ok(Json(ProcessNotesResponse {
        success: true,
        notes: parser::parse_notes(&reply),
    }))
}

pub async fn create_flashcards(
    State(state): State<AppState>,
    input: Result<Json<CreateFlashcardsInput>, JsonRejection>,
) -> Result<Json<FlashcardsResponse>, ApiError> {
    let Json(input) = input?;
    let topic =
        required(&input.topic).ok_or_else(|| ApiError::bad_request("Topic is required"))?;
    let model = state.config.model_or_default(input.model_id.as_deref());

    let request = prompts::flashcards(model, topic, input.description.as_deref());
    let reply = state.provider.generate(&request).await?;
    let deck = parser::parse_flashcards(&reply, topic)
        .map_err(ApiError::parse("Failed to parse flashcards from AI response"))?;

    Ok(Json(FlashcardsResponse {
        success: true,
        deck,
    }))
}

pub async fn study_mode(
    State(state): State<AppState>,
    input: Result<Json<StudyModeInput>, JsonRejection>,
) -> Result<Json<StudyModeResponse>, ApiError> {
    let Json(input) = input?;
    let topic =
        required(&input.topic).ok_or_else(|| ApiError::bad_request("Topic is required"))?;
    let model = state.config.model_or_default(input.model_id.as_deref());

    let request = prompts::study_mode(model, topic, input.material.as_deref());
    let reply = state.provider.generate(&request).await?;
    let turn = parser::parse_teaching_turn(&reply);

    Ok(Json(StudyModeResponse {
        success: true,
        teaching_point: turn.teaching_point,
        question: turn.question,
        topic: topic.to_string(),
    }))
}

pub async fn study_points(
    State(state): State<AppState>,
    input: Result<Json<StudyPointsInput>, JsonRejection>,
) -> Result<Json<StudyPointsResponse>, ApiError> {
    let Json(input) = input?;
    let topic =
        required(&input.topic).ok_or_else(|| ApiError::bad_request("Topic is required"))?;
    let model = state.config.model_or_default(input.model_id.as_deref());
    let count = input
        .point_count
        .filter(|c| *c > 0)
        .unwrap_or(DEFAULT_POINT_COUNT);

    let request = prompts::study_points(model, topic, input.material.as_deref(), count);
    let reply = state.provider.generate(&request).await?;
    let points = parser::parse_study_points(&reply, count)
        .map_err(ApiError::parse("Failed to parse study points from AI response"))?;

    Ok(Json(StudyPointsResponse {
        success: true,
        points,
    }))
}

pub async fn evaluate_answer(
    State(state): State<AppState>,
    input: Result<Json<EvaluateAnswerInput>, JsonRejection>,
) -> Result<Json<EvaluateAnswerResponse>, ApiError> {
    let Json(input) = input?;
    let (Some(question), Some(answer), Some(topic)) = (
        required(&input.question),
        required(&input.user_answer),
        required(&input.topic),
    ) else {
        return Err(ApiError::bad_request(
            "Question, userAnswer, and topic are required",
        ));
    };
    let model = state.config.model_or_default(input.model_id.as_deref());

    let request = prompts::evaluate_answer(model, topic, question, answer);
    let feedback = state.provider.generate(&request).await?;

    Ok(Json(EvaluateAnswerResponse {
        success: true,
        feedback,
    }))
}

pub async fn exam_prep(
    State(state): State<AppState>,
    input: Result<Json<ExamPrepInput>, JsonRejection>,
) -> Result<Json<ExamPrepResponse>, ApiError> {
    let Json(input) = input?;
    let syllabus = required(&input.syllabus);
    let pyqs = required(&input.pyqs);
    if syllabus.is_none() && pyqs.is_none() {
        return Err(ApiError::bad_request(
            "Please provide syllabus and/or past year questions",
        ));
    }
    let model = state.config.model_or_default(input.model_id.as_deref());

    let request = prompts::exam_prep(model, syllabus, pyqs);
    let reply = state.provider.generate(&request).await?;
    let analysis = parser::parse_exam_report(&reply)
        .map_err(ApiError::parse("Failed to parse analysis results"))?;

    Ok(Json(ExamPrepResponse {
        success: true,
        result: ExamPrepResult { analysis },
    }))
}

pub async fn generate_topic_graph(
    State(state): State<AppState>,
    input: Result<Json<TopicGraphInput>, JsonRejection>,
) -> Result<Json<TopicGraphResponse>, ApiError> {
    let Json(input) = input?;
    let topic =
        required(&input.topic).ok_or_else(|| ApiError::bad_request("Topic is required"))?;
    let model = state.config.model_or_default(input.model_id.as_deref());
    // Hints keep the position of their card, blank questions included.
    let questions: Vec<String> = input
        .flashcards
        .iter()
        .map(|card| card.question.trim().to_string())
        .collect();

    let request = prompts::topic_graph(model, topic, input.description.as_deref(), &questions);
    let reply = state.provider.generate(&request).await?;
    let visualization = parser::parse_topic_graph(&reply)
        .map_err(ApiError::parse("Failed to parse visualization guide from AI response"))?;

    Ok(Json(TopicGraphResponse {
        success: true,
        topic: topic.to_string(),
        visualization,
        generated_at: Utc::now(),
    }))
}

// ============================================================
// Sessions
// ============================================================

pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<ChatSessionSummary>> {
    Json(state.sessions.list())
}

/// The body is optional; a request without one creates an untitled session.
pub async fn create_session(
    State(state): State<AppState>,
    input: Result<Json<CreateSessionInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ChatSession>), ApiError> {
    let title = match input {
        Ok(Json(input)) => input.title,
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) => return Err(rejection.into()),
    };
    Ok((StatusCode::CREATED, Json(state.sessions.create(title))))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatSession>, ApiError> {
    state
        .sessions
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Session not found"))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.delete(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Session not found"))
    }
}

pub async fn post_session_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    input: Result<Json<SessionMessageInput>, JsonRejection>,
) -> Result<Json<SessionMessageResponse>, ApiError> {
    let Json(input) = input?;
    let message =
        required(&input.message).ok_or_else(|| ApiError::bad_request("Message is required"))?;
    let history = state
        .sessions
        .history(id)
        .ok_or_else(|| ApiError::not_found("Session not found"))?;
    let model = state.config.model_or_default(input.model_id.as_deref());

    let request = prompts::chat(model, &history, message);
    let reply = state.provider.generate(&request).await?;

    let session = state
        .sessions
        .append_exchange(id, message, &reply)
        .ok_or_else(|| ApiError::not_found("Session not found"))?;

    Ok(Json(SessionMessageResponse {
        success: true,
        message: reply,
        model: model.to_string(),
        session,
    }))
}
