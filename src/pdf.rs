//! Plain-text to PDF rendering.
//!
//! Pages are A4. Coordinates below are in millimetres measured from the top-left corner,
//! and converted to PDF points (origin bottom-left) only when the content stream is built.

use anyhow::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 20.0;
pub const LINE_HEIGHT_MM: f32 = 7.0;
pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const BODY_FONT_SIZE: f32 = 12.0;
/// Body start when a title occupies the top of the first page.
pub const BODY_TOP_WITH_TITLE_MM: f32 = 35.0;

const POINTS_PER_MM: f32 = 72.0 / 25.4;
/// Average Helvetica glyph width as a fraction of the font size.
const AVERAGE_GLYPH_EM: f32 = 0.5;

/// Characters that fit on one body line.
pub fn line_capacity() -> usize {
    let text_width_pt = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) * POINTS_PER_MM;
    (text_width_pt / (BODY_FONT_SIZE * AVERAGE_GLYPH_EM)).floor() as usize
}

/// Greedy word wrap. Explicit newlines are kept, blank lines survive as empty lines, and
/// words longer than a line are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();

            while chars.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = chars.split_off(width);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }

            let len = chars.len();
            if len == 0 {
                continue;
            }
            if current_len > 0 && current_len + 1 + len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(chars);
            current_len += len;
        }

        lines.push(current);
    }

    lines
}

/// One line of body text placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Baseline distance from the top edge, in millimetres.
    pub y_mm: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// Assign wrapped lines to pages.
pub fn layout(has_title: bool, lines: Vec<String>) -> Vec<PageLayout> {
    let bottom = PAGE_HEIGHT_MM - MARGIN_MM;
    let mut pages = vec![PageLayout::default()];
    let mut y = if has_title {
        BODY_TOP_WITH_TITLE_MM
    } else {
        MARGIN_MM
    };

    for text in lines {
        if y + LINE_HEIGHT_MM > bottom {
            pages.push(PageLayout::default());
            y = MARGIN_MM;
        }
        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine { y_mm: y, text });
        }
        y += LINE_HEIGHT_MM;
    }

    pages
}

/// Map a char to its WinAnsiEncoding byte, or `?` when Helvetica cannot show it.
fn win_ansi(c: char) -> u8 {
    match c {
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2026}' => 0x85,
        '\u{20AC}' => 0x80,
        '\t' => b' ',
        c if (c as u32) < 0x20 => b' ',
        c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
        _ => b'?',
    }
}

fn encode(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi).collect()
}

fn text_op(font: &str, size: f32, x_mm: f32, y_mm: f32, text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), size.into()]),
        Operation::new(
            "Td",
            vec![
                (x_mm * POINTS_PER_MM).into(),
                ((PAGE_HEIGHT_MM - y_mm) * POINTS_PER_MM).into(),
            ],
        ),
        Operation::new("Tj", vec![Object::string_literal(encode(text))]),
        Operation::new("ET", vec![]),
    ]
}

fn font(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

/// Render `text` (and an optional title on the first page) as a PDF document.
pub fn render_pdf(title: Option<&str>, text: &str) -> Result<Vec<u8>> {
    let title = title.map(str::trim).filter(|t| !t.is_empty());
    let pages = layout(title.is_some(), wrap_text(text, line_capacity()));

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let body_font = font(&mut doc, "Helvetica");
    let title_font = font(&mut doc, "Helvetica-Bold");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => body_font,
            "F2" => title_font,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for (index, page) in pages.iter().enumerate() {
        let mut operations = Vec::new();
        if index == 0 {
            if let Some(title) = title {
                operations.extend(text_op("F2", TITLE_FONT_SIZE, MARGIN_MM, MARGIN_MM, title));
            }
        }
        for line in page.lines.iter().filter(|l| !l.text.is_empty()) {
            operations.extend(text_op("F1", BODY_FONT_SIZE, MARGIN_MM, line.y_mm, &line.text));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                (PAGE_WIDTH_MM * POINTS_PER_MM).into(),
                (PAGE_HEIGHT_MM * POINTS_PER_MM).into(),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_line_holds_eighty_characters() {
        assert_eq!(line_capacity(), 80);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn keeps_blank_lines_and_splits_long_words() {
        let lines = wrap_text("abcdefghij\n\nok", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "", "ok"]);
    }

    #[test]
    fn body_starts_lower_when_titled() {
        let titled = layout(true, vec!["a".into()]);
        let untitled = layout(false, vec!["a".into()]);
        assert_eq!(titled[0].lines[0].y_mm, BODY_TOP_WITH_TITLE_MM);
        assert_eq!(untitled[0].lines[0].y_mm, MARGIN_MM);
    }

    #[test]
    fn overflowing_lines_start_a_new_page_at_the_margin() {
        let lines: Vec<String> = (0..60).map(|i| format!("line {}", i)).collect();
        let pages = layout(false, lines);

        assert_eq!(pages.len(), 2);
        let last_on_first = pages[0].lines.last().unwrap();
        assert!(last_on_first.y_mm <= PAGE_HEIGHT_MM - MARGIN_MM);
        assert_eq!(pages[1].lines[0].y_mm, MARGIN_MM);
        assert_eq!(
            pages[0].lines.len() + pages[1].lines.len(),
            60
        );
    }

    #[test]
    fn unsupported_characters_become_question_marks() {
        assert_eq!(encode("café • 日"), b"caf\xe9 \x95 ?".to_vec());
    }

    #[test]
    fn renders_a_pdf_document() {
        let bytes = render_pdf(Some("Notes"), "Hello\nWorld").unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
