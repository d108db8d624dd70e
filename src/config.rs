//! Server configuration loaded from environment variables.

use study_core::models::DEFAULT_MODEL;

/// Default Gemini REST endpoint.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default upload cap for document endpoints: 8 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Provider credential (from GEMINI_API_KEY)
    pub gemini_api_key: Option<String>,
    /// Provider base URL (from STUDY_HELPER_GEMINI_URL)
    pub gemini_base_url: String,
    /// Model used when a request names none (from STUDY_HELPER_DEFAULT_MODEL)
    pub default_model: String,
    /// Upload cap in bytes (from STUDY_HELPER_MAX_UPLOAD_BYTES)
    pub max_upload_bytes: usize,
    /// Allowed CORS origins (from STUDY_HELPER_CORS_ORIGINS, comma-separated)
    pub cors_origins: Option<Vec<String>>,
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let gemini_base_url =
            std::env::var("STUDY_HELPER_GEMINI_URL").unwrap_or(defaults.gemini_base_url);

        let default_model = std::env::var("STUDY_HELPER_DEFAULT_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(defaults.default_model);

        let max_upload_bytes = std::env::var("STUDY_HELPER_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(defaults.max_upload_bytes);

        let cors_origins = std::env::var("STUDY_HELPER_CORS_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect());

        Self {
            gemini_api_key,
            gemini_base_url,
            default_model,
            max_upload_bytes,
            cors_origins,
        }
    }

    /// The caller's model id, or the configured default when absent or blank.
    pub fn model_or_default<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.default_model)
    }

    /// Upload cap in whole megabytes, for error messages.
    pub fn max_upload_mb(&self) -> usize {
        self.max_upload_bytes / (1024 * 1024)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_origins: None,
        }
    }
}
