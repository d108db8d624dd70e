use speculate2::speculate;
use study_core::models::*;
use study_core::prompts::ModelRequest;
use study_helper::provider::{GeminiClient, ModelProvider, ProviderError};
use study_helper::session::SessionStore;
use uuid::Uuid;

speculate! {
    before {
        let store = SessionStore::new();
    }

    describe "session store" {
        describe "create" {
            it "uses the default title when none is given" {
                let session = store.create(None);
                assert_eq!(session.title, DEFAULT_SESSION_TITLE);
                assert!(session.preview.is_none());
            }

            it "trims the given title" {
                let session = store.create(Some("  Chemistry  ".to_string()));
                assert_eq!(session.title, "Chemistry");
            }
        }

        describe "get" {
            it "returns None for an unknown id" {
                assert!(store.get(Uuid::new_v4()).is_none());
            }

            it "returns the stored session" {
                let session = store.create(None);
                let fetched = store.get(session.id).expect("session should exist");
                assert_eq!(fetched.id, session.id);
            }
        }

        describe "append_exchange" {
            it "sets the preview from the first user message only" {
                let session = store.create(None);
                store.append_exchange(session.id, "First", "One");
                let updated = store
                    .append_exchange(session.id, "Second", "Two")
                    .expect("session should exist");

                assert_eq!(updated.preview.as_deref(), Some("First"));
                assert_eq!(updated.turns.len(), 4);
                assert_eq!(updated.turns[3].content, "Two");
            }

            it "keeps history in turn order" {
                let session = store.create(None);
                store.append_exchange(session.id, "Q", "A");

                let history = store.history(session.id).expect("session should exist");
                assert_eq!(history[0].role, ChatRole::User);
                assert_eq!(history[0].content, "Q");
                assert_eq!(history[1].role, ChatRole::Assistant);
            }
        }

        describe "list" {
            it "summarizes without turns" {
                let session = store.create(Some("Physics".to_string()));
                store.append_exchange(session.id, "What is work?", "Force times distance.");

                let list = store.list();
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].turn_count, 2);
                assert_eq!(list[0].preview.as_deref(), Some("What is work?"));
            }
        }
    }

    describe "gemini client" {
        it "fails without an API key before any network call" {
            let client = GeminiClient::new("http://127.0.0.1:9", None);
            let request = ModelRequest::new(DEFAULT_MODEL).text("hello");

            let result = tokio_test::block_on(client.generate(&request));

            match result {
                Err(ProviderError::Unknown(msg)) => assert!(msg.contains("GEMINI_API_KEY")),
                other => panic!("expected Unknown error, got {:?}", other),
            }
        }
    }
}
