use serde_json::Value;

use super::{extract_json_object, MalformedModelOutput};
use crate::models::coerce::text_of;
use crate::models::{Difficulty, Flashcard, FlashcardSet};

/// Normalize one model-authored card.
///
/// Missing `question`/`answer` become empty strings, a missing or non-positive `id` becomes
/// the card's 1-based position, and `difficulty` is coerced to easy|medium|hard.
pub fn normalize_flashcard(card: &Value, index: usize) -> Flashcard {
    let id = card
        .get("id")
        .and_then(Value::as_u64)
        .filter(|&id| id > 0 && id <= u32::MAX as u64)
        .map(|id| id as u32)
        .unwrap_or(index as u32 + 1);

    Flashcard {
        id,
        question: card.get("question").map(text_of).unwrap_or_default(),
        answer: card.get("answer").map(text_of).unwrap_or_default(),
        difficulty: Difficulty::coerce(card.get("difficulty").and_then(Value::as_str)),
    }
}

/// Parse a flashcard reply. `requested_topic` is used when the model omits `topic`.
pub fn parse_flashcards(
    text: &str,
    requested_topic: &str,
) -> Result<FlashcardSet, MalformedModelOutput> {
    let value = extract_json_object(text)?;
    let cards = value
        .get("flashcards")
        .and_then(Value::as_array)
        .ok_or(MalformedModelOutput::MissingArray("flashcards"))?;

    let flashcards: Vec<Flashcard> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| normalize_flashcard(card, index))
        .collect();

    let topic = value
        .get("topic")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(requested_topic)
        .to_string();

    Ok(FlashcardSet {
        topic,
        total_cards: flashcards.len(),
        flashcards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_falls_back_to_position() {
        assert_eq!(normalize_flashcard(&json!({}), 0).id, 1);
        assert_eq!(normalize_flashcard(&json!({"id": 0}), 3).id, 4);
        assert_eq!(normalize_flashcard(&json!({"id": "7"}), 3).id, 4);
        assert_eq!(normalize_flashcard(&json!({"id": 42}), 3).id, 42);
    }

    #[test]
    fn missing_text_fields_become_empty() {
        let card = normalize_flashcard(&json!({"difficulty": "easy"}), 0);
        assert_eq!(card.question, "");
        assert_eq!(card.answer, "");
        assert_eq!(card.difficulty, Difficulty::Easy);
    }

    #[test]
    fn blank_topic_uses_requested_topic() {
        let set = parse_flashcards(r#"{"flashcards": [], "topic": " "}"#, "Algebra").unwrap();
        assert_eq!(set.topic, "Algebra");
        assert_eq!(set.total_cards, 0);
    }
}
