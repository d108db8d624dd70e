use serde::{Deserialize, Serialize};

/// Structured notes produced by the teaching-assistant notes workflow.
///
/// Built by section-delimited parsing of one model reply. Sections the model did not
/// produce hold placeholder text rather than being absent, so the UI always has
/// something to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNotesResult {
    pub typed_notes: String,
    pub summary: String,
    pub key_concepts: Vec<String>,
    pub takeaways: Vec<String>,
    pub questions_to_study: Vec<String>,
}
