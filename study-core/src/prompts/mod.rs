//! Prompt composition.
//!
//! Each workflow's prompt is its static template followed by the caller's free text, joined
//! with fixed separators. Nothing is escaped or length-checked here; upload size limits are
//! enforced at the HTTP boundary.

pub mod templates;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::models::HistoryMessage;

/// How many trailing history turns are replayed to the model.
pub const HISTORY_WINDOW: usize = 10;

/// At most this many flashcard questions are offered as topic-graph hints.
pub const TOPIC_GRAPH_FLASHCARD_HINTS: usize = 8;

/// One piece of a model request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPart {
    Text(String),
    /// Base64-encoded binary content (PDF or image).
    InlineData { mime_type: String, data: String },
}

/// A binary upload forwarded to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Images keep their own type; anything else is sent as a PDF.
    pub fn from_upload(content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let mime_type = match content_type {
            Some(ct) if ct.starts_with("image/") => ct.to_string(),
            _ => "application/pdf".to_string(),
        };
        Self::new(mime_type, bytes)
    }
}

/// Everything needed for a single provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub parts: Vec<PromptPart>,
}

impl ModelRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: None,
            parts: Vec::new(),
        }
    }

    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(PromptPart::Text(text.into()));
        self
    }

    pub fn attachment(mut self, attachment: &Attachment) -> Self {
        self.parts.push(PromptPart::InlineData {
            mime_type: attachment.mime_type.clone(),
            data: STANDARD.encode(&attachment.bytes),
        });
        self
    }

    /// All text parts joined by blank lines, mainly for logging and tests.
    pub fn text_content(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                PromptPart::Text(t) => Some(t.as_str()),
                PromptPart::InlineData { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Free-form tutoring chat with the last [`HISTORY_WINDOW`] turns as context.
pub fn chat(model: &str, history: &[HistoryMessage], message: &str) -> ModelRequest {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let request = history[start..].iter().fold(
        ModelRequest::new(model).text(templates::CHAT_ASSISTANT),
        |req, turn| req.text(format!("{}: {}", turn.role.speaker(), turn.content)),
    );
    request
        .text(format!("User: {}", message))
        .text("Assistant:")
}

/// Document workflows: the workflow prompt followed by the uploaded file.
pub fn document(model: &str, prompt: &str, attachment: &Attachment) -> ModelRequest {
    ModelRequest::new(model).text(prompt).attachment(attachment)
}

pub fn flashcards(model: &str, topic: &str, description: Option<&str>) -> ModelRequest {
    let message = match present(description) {
        Some(context) => format!(
            "Create flashcards for the topic: \"{}\"\n\nAdditional context:\n{}",
            topic, context
        ),
        None => format!("Create flashcards for the topic: \"{}\"", topic),
    };
    ModelRequest::new(model)
        .text(templates::TEACHING_ASSISTANT_FLASHCARDS)
        .text(message)
}

pub fn study_mode(model: &str, topic: &str, material: Option<&str>) -> ModelRequest {
    let message = match present(material) {
        Some(material) => format!(
            "Topic to teach: \"{}\"\n\nStudy Material:\n{}\n\nPlease teach the first concept about this topic and ask a question.",
            topic, material
        ),
        None => format!(
            "Topic to teach: \"{}\"\n\nPlease teach the first concept about this topic and ask a question.",
            topic
        ),
    };
    ModelRequest::new(model)
        .text(templates::study_mode(topic))
        .text(message)
}

pub fn study_points(
    model: &str,
    topic: &str,
    material: Option<&str>,
    count: usize,
) -> ModelRequest {
    let message = match present(material) {
        Some(material) => format!("Topic: \"{}\"\n\nStudy Material:\n{}", topic, material),
        None => format!("Topic: \"{}\"", topic),
    };
    ModelRequest::new(model)
        .text(templates::study_points(topic, count))
        .text(message)
}

pub fn evaluate_answer(model: &str, topic: &str, question: &str, answer: &str) -> ModelRequest {
    ModelRequest::new(model)
        .text(templates::evaluate_answer(topic))
        .text(format!(
            "Question: \"{}\"\n\nStudent's Answer: \"{}\"\n\nProvide feedback on their answer.",
            question, answer
        ))
}

pub fn exam_prep(model: &str, syllabus: Option<&str>, pyqs: Option<&str>) -> ModelRequest {
    let content = format!(
        "\nSYLLABUS:\n{}\n\nPAST YEAR QUESTIONS:\n{}\n\nPlease analyze this content and provide study priorities for maximum exam success.",
        present(syllabus).unwrap_or("[No syllabus provided]"),
        present(pyqs).unwrap_or("[No PYQs provided]"),
    );
    ModelRequest::new(model)
        .system_instruction(templates::ANALYZE_EXAM_PREP)
        .text(content)
}

pub fn topic_graph(
    model: &str,
    topic: &str,
    description: Option<&str>,
    flashcard_questions: &[String],
) -> ModelRequest {
    let mut message = format!("Generate a topic visualization guide for: \"{}\"", topic);
    if let Some(context) = present(description) {
        message.push_str(&format!("\n\nAdditional context: {}", context));
    }
    if !flashcard_questions.is_empty() {
        let hints: Vec<String> = flashcard_questions
            .iter()
            .take(TOPIC_GRAPH_FLASHCARD_HINTS)
            .enumerate()
            .map(|(i, q)| format!("{}. {}", i + 1, q))
            .collect();
        message.push_str("\n\nKey concepts from flashcards:\n");
        message.push_str(&hints.join("\n"));
    }
    ModelRequest::new(model)
        .text(templates::TEACHING_ASSISTANT_TOPIC_GRAPH)
        .text(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;

    fn texts(request: &ModelRequest) -> Vec<&str> {
        request
            .parts
            .iter()
            .filter_map(|p| match p {
                PromptPart::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn chat_keeps_only_last_ten_history_turns() {
        let history: Vec<HistoryMessage> = (0..14)
            .map(|i| HistoryMessage {
                role: if i % 2 == 0 {
                    ChatRole::User
                } else {
                    ChatRole::Assistant
                },
                content: format!("turn {}", i),
            })
            .collect();

        let request = chat("gemini-2.5-flash", &history, "next question");
        let parts = texts(&request);

        // system + 10 history + message + "Assistant:"
        assert_eq!(parts.len(), 13);
        assert_eq!(parts[0], templates::CHAT_ASSISTANT);
        assert_eq!(parts[1], "User: turn 4");
        assert_eq!(parts[2], "Assistant: turn 5");
        assert_eq!(parts[11], "User: next question");
        assert_eq!(parts[12], "Assistant:");
    }

    #[test]
    fn flashcards_adds_context_only_when_present() {
        let plain = flashcards("m", "Photosynthesis", None);
        assert_eq!(
            texts(&plain)[1],
            "Create flashcards for the topic: \"Photosynthesis\""
        );

        let blank = flashcards("m", "Photosynthesis", Some("  "));
        assert_eq!(texts(&blank)[1], texts(&plain)[1]);

        let with_context = flashcards("m", "Photosynthesis", Some("Light reactions only"));
        assert_eq!(
            texts(&with_context)[1],
            "Create flashcards for the topic: \"Photosynthesis\"\n\nAdditional context:\nLight reactions only"
        );
    }

    #[test]
    fn exam_prep_uses_system_instruction_and_placeholders() {
        let request = exam_prep("m", Some("Unit 1: Sets"), None);
        assert_eq!(
            request.system_instruction.as_deref(),
            Some(templates::ANALYZE_EXAM_PREP)
        );
        let body = request.text_content();
        assert!(body.contains("SYLLABUS:\nUnit 1: Sets"));
        assert!(body.contains("PAST YEAR QUESTIONS:\n[No PYQs provided]"));
    }

    #[test]
    fn topic_graph_lists_at_most_eight_flashcard_questions() {
        let questions: Vec<String> = (1..=10).map(|i| format!("Q{}?", i)).collect();
        let request = topic_graph("m", "Cells", Some("Biology 101"), &questions);
        let message = texts(&request)[1];

        assert!(message.starts_with("Generate a topic visualization guide for: \"Cells\""));
        assert!(message.contains("\n\nAdditional context: Biology 101"));
        assert!(message.contains("8. Q8?"));
        assert!(!message.contains("9. Q9?"));
    }

    #[test]
    fn document_encodes_attachment_as_base64() {
        let attachment = Attachment::from_upload(Some("application/pdf"), b"%PDF".to_vec());
        let request = document("m", "extract", &attachment);
        assert_eq!(
            request.parts[1],
            PromptPart::InlineData {
                mime_type: "application/pdf".to_string(),
                data: "JVBERg==".to_string(),
            }
        );
    }

    #[test]
    fn attachment_keeps_image_types_and_defaults_to_pdf() {
        assert_eq!(
            Attachment::from_upload(Some("image/png"), vec![]).mime_type,
            "image/png"
        );
        assert_eq!(
            Attachment::from_upload(Some("application/octet-stream"), vec![]).mime_type,
            "application/pdf"
        );
        assert_eq!(Attachment::from_upload(None, vec![]).mime_type, "application/pdf");
    }
}
