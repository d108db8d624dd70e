use serde::Serialize;

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// A provider model the client can choose from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ModelOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const MODEL_OPTIONS: [ModelOption; 4] = [
    ModelOption {
        id: "gemini-2.0-flash",
        name: "Gemini 2.0 Flash",
        description: "Fast and efficient",
    },
    ModelOption {
        id: "gemini-2.0-flash-lite",
        name: "Gemini 2.0 Flash Lite",
        description: "Lightweight, faster responses",
    },
    ModelOption {
        id: "gemini-2.5-flash",
        name: "Gemini 2.5 Flash",
        description: "Latest and most capable",
    },
    ModelOption {
        id: "gemini-2.5-pro",
        name: "Gemini 2.5 Pro",
        description: "Most powerful reasoning",
    },
];

pub fn model_options() -> &'static [ModelOption] {
    &MODEL_OPTIONS
}
