use serde::{Deserialize, Serialize};

/// One topic in an exam-priority bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorityTopic {
    #[serde(deserialize_with = "super::coerce::text")]
    pub topic: String,
    /// How many times the topic shows up in past year questions.
    #[serde(deserialize_with = "super::coerce::count")]
    pub frequency: u32,
    #[serde(deserialize_with = "super::coerce::count")]
    pub estimated_marks: u32,
    #[serde(deserialize_with = "super::coerce::text")]
    pub reason: String,
    #[serde(deserialize_with = "super::coerce::text_list")]
    pub key_points: Vec<String>,
}

/// Study priorities derived from a syllabus and past year questions.
///
/// - `high_priority`: frequent in past papers (3+ times) or heavily weighted
/// - `medium_priority`: occasional (1-2 times)
/// - `low_priority`: in the syllabus but rarely or never examined
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamPriorityReport {
    #[serde(deserialize_with = "super::coerce::list")]
    pub high_priority: Vec<PriorityTopic>,
    #[serde(deserialize_with = "super::coerce::list")]
    pub medium_priority: Vec<PriorityTopic>,
    #[serde(deserialize_with = "super::coerce::list")]
    pub low_priority: Vec<PriorityTopic>,
    #[serde(deserialize_with = "super::coerce::text")]
    pub time_allocation: String,
    #[serde(deserialize_with = "super::coerce::text_list")]
    pub last_minute_checklist: Vec<String>,
    #[serde(deserialize_with = "super::coerce::text")]
    pub exam_strategy: String,
}

/// Wire wrapper matching the `{"analysis": {...}}` shape clients render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExamPrepResult {
    pub analysis: ExamPriorityReport,
}
