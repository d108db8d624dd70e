//! The fixed workflow registry.
//!
//! Strict lookup goes through [`get_workflow`], which fails with
//! [`WorkflowError::UnknownWorkflow`]. Document processing uses [`get_prompt`] and
//! [`get_workflow_name`] instead, which degrade to the text-extraction workflow so an
//! unrecognized id still produces something useful.

use thiserror::Error;

use crate::models::{WorkflowDescriptor, WorkflowId};
use crate::prompts::templates;

/// Name reported for ids that are not in the registry.
pub const FALLBACK_WORKFLOW_NAME: &str = "Extract Text";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Unknown workflow: {0}")]
    UnknownWorkflow(String),
}

const WORKFLOWS: [WorkflowDescriptor; 10] = [
    WorkflowDescriptor {
        id: WorkflowId::HandwrittenToTyped,
        name: "Handwritten to Typed",
        description: "Convert handwritten notes to clean, typed text",
        prompt: templates::HANDWRITTEN_TO_TYPED,
    },
    WorkflowDescriptor {
        id: WorkflowId::NotesCleanup,
        name: "Notes Cleanup & Organization",
        description: "Clean up and organize notes with better structure",
        prompt: templates::NOTES_CLEANUP,
    },
    WorkflowDescriptor {
        id: WorkflowId::SummaryExtraction,
        name: "Summary & Key Points",
        description: "Extract key points and create a summary",
        prompt: templates::SUMMARY_EXTRACTION,
    },
    WorkflowDescriptor {
        id: WorkflowId::StudyGuide,
        name: "Create Study Guide",
        description: "Transform notes into a study guide with Q&A",
        prompt: templates::STUDY_GUIDE,
    },
    WorkflowDescriptor {
        id: WorkflowId::ReportGeneration,
        name: "Generate Report",
        description: "Convert notes into a formal report format",
        prompt: templates::REPORT_GENERATION,
    },
    WorkflowDescriptor {
        id: WorkflowId::TextExtraction,
        name: "Extract All Text",
        description: "Simple text extraction from PDF",
        prompt: templates::TEXT_EXTRACTION,
    },
    WorkflowDescriptor {
        id: WorkflowId::TeachingAssistantNotes,
        name: "Teaching Assistant - Notes Processor",
        description: "Convert handwritten notes to typed, structured, and summarized content",
        prompt: templates::TEACHING_ASSISTANT_NOTES,
    },
    WorkflowDescriptor {
        id: WorkflowId::TeachingAssistantFlashcards,
        name: "Teaching Assistant - Flashcard Creator",
        description: "Create flashcards from topics or study material",
        prompt: templates::TEACHING_ASSISTANT_FLASHCARDS,
    },
    WorkflowDescriptor {
        id: WorkflowId::TeachingAssistantStudyMode,
        name: "Teaching Assistant - Study Mode",
        description: "50% teaching, 50% questioning to reinforce learning",
        prompt: templates::TEACHING_ASSISTANT_STUDY_MODE,
    },
    WorkflowDescriptor {
        id: WorkflowId::TeachingAssistantTopicGraph,
        name: "Teaching Assistant - Topic Graph Generator",
        description: "Generate detailed visual descriptions for concept maps and topic graphs",
        prompt: templates::TEACHING_ASSISTANT_TOPIC_GRAPH,
    },
];

/// All registered workflows, in registry order.
pub fn get_all_workflows() -> &'static [WorkflowDescriptor] {
    &WORKFLOWS
}

pub fn descriptor(id: WorkflowId) -> &'static WorkflowDescriptor {
    // WORKFLOWS is laid out in WorkflowId declaration order.
    &WORKFLOWS[id as usize]
}

pub fn get_workflow(id: &str) -> Result<&'static WorkflowDescriptor, WorkflowError> {
    WorkflowId::from_str(id)
        .map(descriptor)
        .ok_or_else(|| WorkflowError::UnknownWorkflow(id.to_string()))
}

/// The workflow's system prompt, or the text-extraction prompt for unknown ids.
pub fn get_prompt(id: &str) -> &'static str {
    get_workflow(id)
        .map(|w| w.prompt)
        .unwrap_or(templates::TEXT_EXTRACTION)
}

/// The workflow's display name, or [`FALLBACK_WORKFLOW_NAME`] for unknown ids.
pub fn get_workflow_name(id: &str) -> &'static str {
    get_workflow(id)
        .map(|w| w.name)
        .unwrap_or(FALLBACK_WORKFLOW_NAME)
}
