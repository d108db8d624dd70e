use std::sync::LazyLock;

use regex::Regex;

use crate::models::ParsedNotesResult;

pub const SUMMARY_PLACEHOLDER: &str = "Summary not extracted. Please review the full notes.";
pub const CONCEPTS_PLACEHOLDER: &str = "Please review the typed notes above for key concepts";
pub const TAKEAWAYS_PLACEHOLDER: &str = "Please review the summary above for key takeaways";
pub const QUESTIONS_PLACEHOLDER: &str =
    "Review the main concepts and create your own study questions";

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^## (Typed & Organized Notes|Key Concepts|Summary|Key Takeaways|Questions to Study)[ \t]*\r?$",
    )
    .expect("header pattern is valid")
});

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("numbered pattern is valid"));

static QA_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[QA]\d+:\s*").expect("Q/A pattern is valid"));

/// A section of the teaching-assistant notes format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSection {
    TypedNotes,
    KeyConcepts,
    Summary,
    Takeaways,
    QuestionsToStudy,
}

impl NoteSection {
    /// Map header text (as it appears after `## `) to its section.
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "Typed & Organized Notes" => Some(Self::TypedNotes),
            "Key Concepts" => Some(Self::KeyConcepts),
            "Summary" => Some(Self::Summary),
            "Key Takeaways" => Some(Self::Takeaways),
            "Questions to Study" => Some(Self::QuestionsToStudy),
            _ => None,
        }
    }
}

/// Locate every known header line and return each section's trimmed body.
///
/// A body runs from the line after its header up to the next known header line or the end
/// of the text. When a header repeats, the first occurrence wins.
fn split_sections(text: &str) -> Vec<(NoteSection, &str)> {
    let headers: Vec<(NoteSection, usize, usize)> = HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let line = caps.get(0)?;
            let section = NoteSection::from_header(caps.get(1)?.as_str())?;
            Some((section, line.start(), line.end()))
        })
        .collect();

    let mut sections: Vec<(NoteSection, &str)> = Vec::new();
    for (i, &(section, _, header_end)) in headers.iter().enumerate() {
        if sections.iter().any(|(s, _)| *s == section) {
            continue;
        }
        let body_end = headers
            .get(i + 1)
            .map(|&(_, start, _)| start)
            .unwrap_or(text.len());
        let body = text.get(header_end..body_end).unwrap_or_default();
        sections.push((section, body.trim()));
    }
    sections
}

fn bullet_items(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter_map(|line| {
            line.strip_prefix('-')
                .or_else(|| line.strip_prefix('•'))
                .map(str::trim)
        })
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn numbered_items(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter_map(|line| NUMBERED.find(line).map(|m| line[m.end()..].trim()))
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn question_items(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter_map(|line| {
            line.strip_prefix('-')
                .or_else(|| line.strip_prefix('•'))
                .or_else(|| QA_LABEL.find(line).map(|m| &line[m.end()..]))
                .map(str::trim)
        })
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn or_placeholder(items: Vec<String>, placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}

/// Split a notes reply into its five sections.
///
/// Never fails. A missing typed-notes section falls back to the whole reply, a missing
/// summary to [`SUMMARY_PLACEHOLDER`], and any list that ends up empty to a single
/// placeholder entry.
pub fn parse_notes(text: &str) -> ParsedNotesResult {
    let sections = split_sections(text);
    let body = |wanted: NoteSection| {
        sections
            .iter()
            .find(|(section, _)| *section == wanted)
            .map(|(_, body)| *body)
    };

    ParsedNotesResult {
        typed_notes: body(NoteSection::TypedNotes).unwrap_or(text).to_string(),
        summary: body(NoteSection::Summary)
            .unwrap_or(SUMMARY_PLACEHOLDER)
            .to_string(),
        key_concepts: or_placeholder(
            body(NoteSection::KeyConcepts)
                .map(bullet_items)
                .unwrap_or_default(),
            CONCEPTS_PLACEHOLDER,
        ),
        takeaways: or_placeholder(
            body(NoteSection::Takeaways)
                .map(numbered_items)
                .unwrap_or_default(),
            TAKEAWAYS_PLACEHOLDER,
        ),
        questions_to_study: or_placeholder(
            body(NoteSection::QuestionsToStudy)
                .map(question_items)
                .unwrap_or_default(),
            QUESTIONS_PLACEHOLDER,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_header_knows_every_section() {
        assert_eq!(
            NoteSection::from_header("Typed & Organized Notes"),
            Some(NoteSection::TypedNotes)
        );
        assert_eq!(
            NoteSection::from_header("Questions to Study"),
            Some(NoteSection::QuestionsToStudy)
        );
        assert_eq!(NoteSection::from_header("Key Points"), None);
    }

    #[test]
    fn subheadings_do_not_end_a_section() {
        let text = "## Typed & Organized Notes\nIntro\n### Detail\nMore\n## Summary\nShort.";
        let notes = parse_notes(text);
        assert_eq!(notes.typed_notes, "Intro\n### Detail\nMore");
        assert_eq!(notes.summary, "Short.");
    }

    #[test]
    fn header_must_be_the_whole_line() {
        let text = "## Summary of chapter 3\nnot a summary section";
        let notes = parse_notes(text);
        assert_eq!(notes.summary, SUMMARY_PLACEHOLDER);
        assert_eq!(notes.typed_notes, text);
    }

    #[test]
    fn first_occurrence_of_a_repeated_header_wins() {
        let text = "## Summary\nfirst\n## Key Concepts\n- a\n## Summary\nsecond";
        assert_eq!(parse_notes(text).summary, "first");
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let text = "## Key Concepts\r\n- Osmosis\r\n- Diffusion\r\n";
        assert_eq!(parse_notes(text).key_concepts, vec!["Osmosis", "Diffusion"]);
    }

    #[test]
    fn list_items_ignore_unmarked_lines() {
        assert_eq!(
            bullet_items("intro\n- one\n  • two\n-   \nthree"),
            vec!["one", "two"]
        );
        assert_eq!(
            numbered_items("1. alpha\n  12.beta\nno\n3."),
            vec!["alpha", "beta"]
        );
        assert_eq!(
            question_items("- Why?\nQ1: How?\nA1: Because.\nplain"),
            vec!["Why?", "How?", "Because."]
        );
    }
}
