//! Domain models for the study helper.
//!
//! # Core Concepts
//!
//! ## Registry
//!
//! - [`WorkflowDescriptor`]: A named prompt template plus the output shape the model is asked for.
//!   The table is fixed at compile time and looked up by [`WorkflowId`].
//! - [`ModelOption`]: One of the selectable provider models.
//!
//! ## Parsed Results
//!
//! Every parsed result is a pure function of one raw model reply. They are built once per
//! request, handed back to the caller and never updated in place:
//!
//! - [`ParsedNotesResult`]: Section-delimited notes (typed notes, summary, concept lists).
//! - [`FlashcardSet`] / [`Flashcard`]: Normalized flashcards from an embedded JSON object.
//! - [`TeachingTurn`]: One Socratic teaching point plus its follow-up question.
//! - [`ExamPriorityReport`]: Topics bucketed by exam priority.
//! - [`TopicGraph`]: Concept-map description of a topic.
//!
//! ## Ephemeral Entities
//!
//! - [`ChatSession`]: In-memory, append-only sequence of [`ChatTurn`]s.

mod chat;
pub mod coerce;
mod exam;
mod flashcard;
mod model_option;
mod notes;
mod study;
mod topic_graph;
mod workflow;

pub use chat::*;
pub use exam::*;
pub use flashcard::*;
pub use model_option::*;
pub use notes::*;
pub use study::*;
pub use topic_graph::*;
pub use workflow::*;
