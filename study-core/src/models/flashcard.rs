use serde::{Deserialize, Serialize};

/// How hard a flashcard (or concept) is.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Map any model-supplied value onto the allowed set, defaulting to `Medium`.
    pub fn coerce(value: Option<&str>) -> Self {
        value.and_then(Self::from_str).unwrap_or_default()
    }
}

/// A single question/answer card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flashcard {
    pub id: u32,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
}

/// The normalized flashcard deck for one topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardSet {
    pub topic: String,
    pub flashcards: Vec<Flashcard>,
    pub total_cards: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_defaults_to_medium() {
        assert_eq!(Difficulty::coerce(None), Difficulty::Medium);
        assert_eq!(Difficulty::coerce(Some("impossible")), Difficulty::Medium);
        assert_eq!(Difficulty::coerce(Some("HARD")), Difficulty::Medium);
        assert_eq!(Difficulty::coerce(Some("hard")), Difficulty::Hard);
        assert_eq!(Difficulty::coerce(Some("easy")), Difficulty::Easy);
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
    }
}
