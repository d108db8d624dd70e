use serde_json::Value;

use super::{extract_json_object, MalformedModelOutput};
use crate::models::ExamPriorityReport;

/// Parse an exam-prep reply.
///
/// The model is asked for `{"analysis": {...}}`; a bare report object is accepted too.
/// Numeric fields given as strings are coerced and missing fields default to empty.
pub fn parse_exam_report(text: &str) -> Result<ExamPriorityReport, MalformedModelOutput> {
    let value = extract_json_object(text)?;
    let report = if value.get("analysis").is_some_and(Value::is_object) {
        value["analysis"].clone()
    } else {
        value
    };
    serde_json::from_value(report).map_err(MalformedModelOutput::UnexpectedShape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_report() {
        let report =
            parse_exam_report(r#"{"timeAllocation": "2h", "examStrategy": "Start easy"}"#).unwrap();
        assert_eq!(report.time_allocation, "2h");
        assert_eq!(report.exam_strategy, "Start easy");
        assert!(report.high_priority.is_empty());
    }

    #[test]
    fn coerces_loose_numbers() {
        let text = r#"{"analysis": {"highPriority": [
            {"topic": "Limits", "frequency": "4", "estimatedMarks": 10.0, "keyPoints": ["L'Hopital"]}
        ]}}"#;
        let report = parse_exam_report(text).unwrap();
        let limits = &report.high_priority[0];
        assert_eq!(limits.frequency, 4);
        assert_eq!(limits.estimated_marks, 10);
        assert_eq!(limits.reason, "");
        assert_eq!(limits.key_points, vec!["L'Hopital"]);
    }
}
