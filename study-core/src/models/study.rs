use serde::{Deserialize, Serialize};

/// One Socratic exchange: a short explanation followed by a question about it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeachingTurn {
    #[serde(deserialize_with = "super::coerce::text")]
    pub teaching_point: String,
    #[serde(deserialize_with = "super::coerce::text")]
    pub question: String,
}

/// A pre-generated teaching turn from a study-points batch.
pub type StudyPoint = TeachingTurn;

/// Number of study points generated when the caller does not ask for a count.
pub const DEFAULT_POINT_COUNT: usize = 5;
