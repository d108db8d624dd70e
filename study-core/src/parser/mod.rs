//! Model-reply parsing.
//!
//! Two strategies, picked per workflow:
//!
//! - **Section-delimited** ([`parse_notes`], [`parse_teaching_turn`]): find known literal
//!   markers and slice the text between them. Missing sections degrade to placeholder
//!   text; these parsers never fail.
//! - **Embedded JSON** ([`extract_json_object`] and the parsers built on it): take the first
//!   `{` through the last `}` and decode it. Anything that does not decode is a
//!   [`MalformedModelOutput`] error, with no partial recovery.
//!
//! The asymmetry between the two is intentional and kept as is. All parsers are pure
//! functions of their input text.

mod exam;
mod flashcards;
mod json;
mod sections;
mod study_points;
mod teaching;
mod topic_graph;

pub use exam::parse_exam_report;
pub use flashcards::{normalize_flashcard, parse_flashcards};
pub use json::{extract_json, extract_json_object};
pub use sections::{
    parse_notes, NoteSection, CONCEPTS_PLACEHOLDER, QUESTIONS_PLACEHOLDER, SUMMARY_PLACEHOLDER,
    TAKEAWAYS_PLACEHOLDER,
};
pub use study_points::parse_study_points;
pub use teaching::{parse_teaching_turn, QUESTION_MARKER, QUESTION_PLACEHOLDER, TEACHING_MARKER};
pub use topic_graph::parse_topic_graph;

use thiserror::Error;

/// The model replied, but not in the shape the workflow asked for.
#[derive(Debug, Error)]
pub enum MalformedModelOutput {
    #[error("no JSON object found in the model response")]
    NoJsonObject,

    #[error("model response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("model response has an unexpected shape: {0}")]
    UnexpectedShape(#[source] serde_json::Error),

    #[error("model response is missing the `{0}` array")]
    MissingArray(&'static str),
}
