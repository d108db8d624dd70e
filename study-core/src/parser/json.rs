use serde::de::DeserializeOwned;
use serde_json::Value;

use super::MalformedModelOutput;

/// Parse the span from the first `{` to the last `}` as JSON.
///
/// The span is greedy across the whole text, so leading and trailing prose (or a markdown
/// code fence) around a single object is tolerated, but two separate objects are not.
pub fn extract_json_object(text: &str) -> Result<Value, MalformedModelOutput> {
    let start = text.find('{').ok_or(MalformedModelOutput::NoJsonObject)?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(MalformedModelOutput::NoJsonObject)?;
    Ok(serde_json::from_str(&text[start..=end])?)
}

/// [`extract_json_object`] decoded straight into `T`.
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Result<T, MalformedModelOutput> {
    let value = extract_json_object(text)?;
    serde_json::from_value(value).map_err(MalformedModelOutput::UnexpectedShape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_object_surrounded_by_prose() {
        let text = "Sure! Here you go:\n```json\n{\"a\": {\"b\": [1, 2]}}\n```\nHope that helps.";
        assert_eq!(extract_json_object(text).unwrap(), json!({"a": {"b": [1, 2]}}));
    }

    #[test]
    fn fails_without_opening_brace() {
        let err = extract_json_object("no json here }").unwrap_err();
        assert!(matches!(err, MalformedModelOutput::NoJsonObject));
    }

    #[test]
    fn fails_when_closing_brace_precedes_opening_brace() {
        let err = extract_json_object("} then {").unwrap_err();
        assert!(matches!(err, MalformedModelOutput::NoJsonObject));
    }

    #[test]
    fn fails_on_invalid_json_between_braces() {
        let err = extract_json_object("{not: json}").unwrap_err();
        assert!(matches!(err, MalformedModelOutput::InvalidJson(_)));
    }

    #[test]
    fn wrong_shape_is_not_reported_as_invalid_json() {
        let err = extract_json::<Vec<u32>>("{\"a\": 1}").unwrap_err();
        assert!(matches!(err, MalformedModelOutput::UnexpectedShape(_)));
    }

    #[test]
    fn two_objects_are_not_one() {
        let err = extract_json_object("{\"a\":1} and {\"b\":2}").unwrap_err();
        assert!(matches!(err, MalformedModelOutput::InvalidJson(_)));
    }
}
