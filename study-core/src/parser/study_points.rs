use serde_json::Value;

use super::{extract_json_object, MalformedModelOutput};
use crate::models::coerce::text_of;
use crate::models::StudyPoint;

/// Parse a `{"points": [...]}` reply, keeping at most `count` points.
pub fn parse_study_points(
    text: &str,
    count: usize,
) -> Result<Vec<StudyPoint>, MalformedModelOutput> {
    let value = extract_json_object(text)?;
    let points = value
        .get("points")
        .and_then(Value::as_array)
        .ok_or(MalformedModelOutput::MissingArray("points"))?;

    Ok(points
        .iter()
        .take(count)
        .map(|point| StudyPoint {
            teaching_point: point.get("teachingPoint").map(text_of).unwrap_or_default(),
            question: point.get("question").map(text_of).unwrap_or_default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_requested_count() {
        let text = r#"{"points": [
            {"teachingPoint": "A", "question": "a?"},
            {"teachingPoint": "B", "question": "b?"},
            {"teachingPoint": "C", "question": "c?"}
        ]}"#;
        let points = parse_study_points(text, 2).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].teaching_point, "B");
        assert_eq!(points[1].question, "b?");
    }

    #[test]
    fn requires_points_array() {
        let err = parse_study_points(r#"{"points": "none"}"#, 5).unwrap_err();
        assert!(matches!(err, MalformedModelOutput::MissingArray("points")));
    }
}
