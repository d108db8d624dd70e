mod error;
mod handlers;
pub mod types;

pub use error::{ApiError, QUOTA_EXCEEDED_MESSAGE};

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::provider::ModelProvider;
use crate::session::SessionStore;

/// Headroom above the upload cap for multipart framing and the other form fields.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ModelProvider>,
    pub config: Arc<AppConfig>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(provider: Arc<dyn ModelProvider>, config: AppConfig) -> Self {
        Self {
            provider,
            config: Arc::new(config),
            sessions: SessionStore::new(),
        }
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    match &config.cors_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", o);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
        None => CorsLayer::permissive(),
    }
}

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;
    let cors = cors_layer(&state.config);

    let api = Router::new()
        // Catalog
        .route("/workflows", get(handlers::list_workflows))
        .route("/workflows/{id}", get(handlers::get_workflow))
        .route("/models", get(handlers::list_models))
        // Chat
        .route("/chat", post(handlers::chat))
        // Documents
        .route("/process-pdf", post(handlers::process_pdf))
        .route("/handwritten-to-pdf", post(handlers::handwritten_to_pdf))
        .route("/generate-pdf", post(handlers::generate_pdf))
        // Teaching assistant
        .route(
            "/teaching-assistant/process-notes",
            post(handlers::process_notes),
        )
        .route(
            "/teaching-assistant/create-flashcards",
            post(handlers::create_flashcards),
        )
        .route("/teaching-assistant/study-mode", post(handlers::study_mode))
        .route(
            "/teaching-assistant/study-points",
            post(handlers::study_points),
        )
        .route(
            "/teaching-assistant/evaluate-answer",
            post(handlers::evaluate_answer),
        )
        .route("/teaching-assistant/exam-prep", post(handlers::exam_prep))
        .route(
            "/teaching-assistant/generate-topic-graph",
            post(handlers::generate_topic_graph),
        )
        // Sessions
        .route(
            "/sessions",
            get(handlers::list_sessions).post(handlers::create_session),
        )
        .route(
            "/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/sessions/{id}/messages", post(handlers::post_session_message))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
