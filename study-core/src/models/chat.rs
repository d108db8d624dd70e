use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to sessions created without one.
pub const DEFAULT_SESSION_TITLE: &str = "New Study Session";

/// Longest preview (in characters) kept from the first user message.
const PREVIEW_LEN: usize = 60;

/// Who authored a chat turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Speaker label used when flattening history into a prompt.
    pub fn speaker(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A history entry as sent by clients, without a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryMessage {
    pub role: ChatRole,
    pub content: String,
}

impl From<&ChatTurn> for HistoryMessage {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

/// A chat conversation held in memory for the lifetime of the process.
///
/// Turns are **append-only**: they are pushed in order and never edited or removed.
/// Deleting the session is the only way to discard them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: Uuid,
    pub title: String,
    /// Truncated first user message, shown in session lists.
    pub preview: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new(title: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_SESSION_TITLE.to_string()),
            preview: None,
            created_at: now,
            updated_at: now,
            turns: Vec::new(),
        }
    }

    /// Append a turn. The first user turn also sets the preview.
    pub fn push(&mut self, role: ChatRole, content: impl Into<String>) -> &ChatTurn {
        let content = content.into();
        if role == ChatRole::User && self.preview.is_none() {
            self.preview = Some(truncate(&content, PREVIEW_LEN));
        }
        let now = Utc::now();
        self.updated_at = now;
        self.turns.push(ChatTurn {
            role,
            content,
            timestamp: now,
        });
        &self.turns[self.turns.len() - 1]
    }

    pub fn history(&self) -> Vec<HistoryMessage> {
        self.turns.iter().map(HistoryMessage::from).collect()
    }
}

/// Session listing entry without the turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionSummary {
    pub id: Uuid,
    pub title: String,
    pub preview: Option<String>,
    pub turn_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl From<&ChatSession> for ChatSessionSummary {
    fn from(session: &ChatSession) -> Self {
        Self {
            id: session.id,
            title: session.title.clone(),
            preview: session.preview.clone(),
            turn_count: session.turns.len(),
            updated_at: session.updated_at,
        }
    }
}

/// Cut `s` to at most `max` characters, ending in `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_uses_default_title_when_blank() {
        assert_eq!(ChatSession::new(None).title, DEFAULT_SESSION_TITLE);
        assert_eq!(ChatSession::new(Some("   ".into())).title, DEFAULT_SESSION_TITLE);
        assert_eq!(ChatSession::new(Some("Calculus".into())).title, "Calculus");
    }

    #[test]
    fn first_user_turn_sets_preview_once() {
        let mut session = ChatSession::new(None);
        session.push(ChatRole::Assistant, "Hello!");
        assert!(session.preview.is_none());

        session.push(ChatRole::User, "What is supervised learning?");
        session.push(ChatRole::User, "And unsupervised?");
        assert_eq!(
            session.preview.as_deref(),
            Some("What is supervised learning?")
        );
        assert_eq!(session.turns.len(), 3);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
