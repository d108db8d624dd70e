use serde::{Deserialize, Serialize};

use super::flashcard::Difficulty;

/// A concept-map description of a topic, used to draw a memorization diagram.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TopicGraph {
    #[serde(deserialize_with = "super::coerce::text")]
    pub main_topic: String,
    #[serde(deserialize_with = "super::coerce::object")]
    pub visualization: Visualization,
    #[serde(deserialize_with = "super::coerce::list")]
    pub concepts: Vec<Concept>,
    #[serde(deserialize_with = "super::coerce::list")]
    pub relationships: Vec<Relationship>,
    #[serde(deserialize_with = "super::coerce::text")]
    pub visualization_guide: String,
}

/// Overall diagram style.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Visualization {
    /// `concept_map`, `mind_map` or `knowledge_graph`.
    #[serde(rename = "type", deserialize_with = "super::coerce::text")]
    pub kind: String,
    /// `radial`, `hierarchical` or `network`.
    #[serde(deserialize_with = "super::coerce::text")]
    pub layout: String,
    #[serde(deserialize_with = "super::coerce::text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Concept {
    #[serde(deserialize_with = "super::coerce::text")]
    pub name: String,
    #[serde(deserialize_with = "super::coerce::text")]
    pub definition: String,
    #[serde(deserialize_with = "difficulty")]
    pub difficulty: Difficulty,
    /// Suggested hex color.
    #[serde(deserialize_with = "super::coerce::text")]
    pub color: String,
    #[serde(deserialize_with = "super::coerce::text_list")]
    pub connections: Vec<String>,
    #[serde(deserialize_with = "super::coerce::text")]
    pub memory_aid: String,
}

/// A directed edge between two concepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Relationship {
    #[serde(deserialize_with = "super::coerce::text")]
    pub from: String,
    #[serde(deserialize_with = "super::coerce::text")]
    pub to: String,
    /// e.g. `is-a`, `part-of`, `leads-to`.
    #[serde(deserialize_with = "super::coerce::text")]
    pub relationship: String,
    #[serde(deserialize_with = "super::coerce::text")]
    pub explanation: String,
}

fn difficulty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Difficulty, D::Error> {
    let raw = super::coerce::text(deserializer)?;
    Ok(Difficulty::coerce(Some(raw.trim())))
}
