//! In-memory chat session store.
//!
//! The lock is only held for map operations. Handlers take a history snapshot, release the
//! lock, call the provider, then append both turns in one step via
//! [`SessionStore::append_exchange`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use study_core::models::{ChatRole, ChatSession, ChatSessionSummary, HistoryMessage};
use uuid::Uuid;

#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, ChatSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, title: Option<String>) -> ChatSession {
        let session = ChatSession::new(title);
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.insert(session.id, session.clone());
        session
    }

    /// Summaries, most recently updated first.
    pub fn list(&self) -> Vec<ChatSessionSummary> {
        let sessions = self.sessions.lock().expect("session lock poisoned");
        let mut summaries: Vec<ChatSessionSummary> =
            sessions.values().map(ChatSessionSummary::from).collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        summaries
    }

    pub fn get(&self, id: Uuid) -> Option<ChatSession> {
        let sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.get(&id).cloned()
    }

    /// Returns whether a session was removed.
    pub fn delete(&self, id: Uuid) -> bool {
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.remove(&id).is_some()
    }

    pub fn history(&self, id: Uuid) -> Option<Vec<HistoryMessage>> {
        let sessions = self.sessions.lock().expect("session lock poisoned");
        sessions.get(&id).map(ChatSession::history)
    }

    /// Record a completed user/assistant exchange. Returns `None` if the session was deleted
    /// while the provider call was in flight.
    pub fn append_exchange(&self, id: Uuid, message: &str, reply: &str) -> Option<ChatSession> {
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        let session = sessions.get_mut(&id)?;
        session.push(ChatRole::User, message);
        session.push(ChatRole::Assistant, reply);
        Some(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_appends_user_then_assistant() {
        let store = SessionStore::new();
        let session = store.create(None);

        let updated = store
            .append_exchange(session.id, "What is osmosis?", "Water moving across a membrane.")
            .unwrap();

        assert_eq!(updated.turns.len(), 2);
        assert_eq!(updated.turns[0].role, ChatRole::User);
        assert_eq!(updated.turns[1].role, ChatRole::Assistant);
        assert_eq!(updated.preview.as_deref(), Some("What is osmosis?"));
        assert_eq!(store.history(session.id).unwrap().len(), 2);
    }

    #[test]
    fn exchange_on_deleted_session_is_dropped() {
        let store = SessionStore::new();
        let session = store.create(Some("Biology".into()));
        assert!(store.delete(session.id));

        assert!(store.append_exchange(session.id, "hi", "hello").is_none());
        assert!(!store.delete(session.id));
    }

    #[test]
    fn list_is_most_recent_first() {
        let store = SessionStore::new();
        let older = store.create(Some("Older".into()));
        let newer = store.create(Some("Newer".into()));
        store.append_exchange(older.id, "bump", "ok");

        let list = store.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, older.id);
        assert_eq!(list[1].id, newer.id);
    }
}
