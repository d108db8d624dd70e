use crate::models::TeachingTurn;

pub const TEACHING_MARKER: &str = "📚 **Teaching Point:**";
pub const QUESTION_MARKER: &str = "❓ **Question:**";
pub const QUESTION_PLACEHOLDER: &str = "What did you learn from the teaching point above?";

/// Split a study-mode reply into its teaching point and question.
///
/// The teaching point runs from its marker to the next `❓` (or the end); the question
/// from its marker to the end. Without markers the whole reply becomes the teaching
/// point and the question falls back to [`QUESTION_PLACEHOLDER`].
pub fn parse_teaching_turn(text: &str) -> TeachingTurn {
    let teaching_point = text
        .find(TEACHING_MARKER)
        .map(|start| {
            let rest = &text[start + TEACHING_MARKER.len()..];
            let end = rest.find('❓').unwrap_or(rest.len());
            rest[..end].trim()
        })
        .unwrap_or(text);

    let question = text
        .find(QUESTION_MARKER)
        .map(|start| text[start + QUESTION_MARKER.len()..].trim())
        .unwrap_or(QUESTION_PLACEHOLDER);

    TeachingTurn {
        teaching_point: teaching_point.to_string(),
        question: question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_both_markers() {
        let text = "📚 **Teaching Point:** Mitochondria make ATP.\n\n❓ **Question:** What do mitochondria produce?";
        let turn = parse_teaching_turn(text);
        assert_eq!(turn.teaching_point, "Mitochondria make ATP.");
        assert_eq!(turn.question, "What do mitochondria produce?");
    }

    #[test]
    fn falls_back_without_markers() {
        let text = "Mitochondria are the powerhouse of the cell.";
        let turn = parse_teaching_turn(text);
        assert_eq!(turn.teaching_point, text);
        assert_eq!(turn.question, QUESTION_PLACEHOLDER);
    }

    #[test]
    fn teaching_point_runs_to_end_without_question() {
        let turn = parse_teaching_turn("📚 **Teaching Point:** Only teaching. ");
        assert_eq!(turn.teaching_point, "Only teaching.");
        assert_eq!(turn.question, QUESTION_PLACEHOLDER);
    }
}
