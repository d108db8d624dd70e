use serde::{Deserialize, Serialize};

/// Identifier of a registered workflow.
///
/// Serialized in its registry-key form (`TEXT_EXTRACTION`), which is also what clients
/// send as `workflowId`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowId {
    HandwrittenToTyped,
    NotesCleanup,
    SummaryExtraction,
    StudyGuide,
    ReportGeneration,
    TextExtraction,
    TeachingAssistantNotes,
    TeachingAssistantFlashcards,
    TeachingAssistantStudyMode,
    TeachingAssistantTopicGraph,
}

impl WorkflowId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HandwrittenToTyped => "HANDWRITTEN_TO_TYPED",
            Self::NotesCleanup => "NOTES_CLEANUP",
            Self::SummaryExtraction => "SUMMARY_EXTRACTION",
            Self::StudyGuide => "STUDY_GUIDE",
            Self::ReportGeneration => "REPORT_GENERATION",
            Self::TextExtraction => "TEXT_EXTRACTION",
            Self::TeachingAssistantNotes => "TEACHING_ASSISTANT_NOTES",
            Self::TeachingAssistantFlashcards => "TEACHING_ASSISTANT_FLASHCARDS",
            Self::TeachingAssistantStudyMode => "TEACHING_ASSISTANT_STUDY_MODE",
            Self::TeachingAssistantTopicGraph => "TEACHING_ASSISTANT_TOPIC_GRAPH",
        }
    }

    /// Parse a registry key. The lowercase form (`text_extraction`) is accepted too.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HANDWRITTEN_TO_TYPED" => Some(Self::HandwrittenToTyped),
            "NOTES_CLEANUP" => Some(Self::NotesCleanup),
            "SUMMARY_EXTRACTION" => Some(Self::SummaryExtraction),
            "STUDY_GUIDE" => Some(Self::StudyGuide),
            "REPORT_GENERATION" => Some(Self::ReportGeneration),
            "TEXT_EXTRACTION" => Some(Self::TextExtraction),
            "TEACHING_ASSISTANT_NOTES" => Some(Self::TeachingAssistantNotes),
            "TEACHING_ASSISTANT_FLASHCARDS" => Some(Self::TeachingAssistantFlashcards),
            "TEACHING_ASSISTANT_STUDY_MODE" => Some(Self::TeachingAssistantStudyMode),
            "TEACHING_ASSISTANT_TOPIC_GRAPH" => Some(Self::TeachingAssistantTopicGraph),
            _ => None,
        }
    }
}

/// A registered workflow: display metadata plus the system prompt it sends.
///
/// Descriptors are static and immutable; see [`crate::workflows`] for lookup.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WorkflowDescriptor {
    pub id: WorkflowId,
    pub name: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}
