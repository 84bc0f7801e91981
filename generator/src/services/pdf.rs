//! PDF rendering of a post batch

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use shared::PostBatch;
use crate::error::{GeneratorError, GeneratorResult};

// US letter, points
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN: i64 = 72;

const TITLE_SIZE: i64 = 14;
const BODY_SIZE: i64 = 12;
const LEADING: i64 = 16;

const WRAP_COLUMNS: usize = 80;
const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize;

#[derive(Debug, Clone, PartialEq)]
struct Line {
    bold: bool,
    size: i64,
    text: String,
}

impl Line {
    fn body(text: impl Into<String>) -> Self {
        Self { bold: false, size: BODY_SIZE, text: text.into() }
    }

    fn bold(text: impl Into<String>, size: i64) -> Self {
        Self { bold: true, size, text: text.into() }
    }
}

/// Render a batch: title and timestamp on the first page, then one page
/// per post (long posts continue onto further pages).
pub fn render_batch(batch: &PostBatch) -> GeneratorResult<Vec<u8>> {
    let pages = layout(batch);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(pages.len());
    for lines in &pages {
        let content = page_content(lines);
        let encoded = content
            .encode()
            .map_err(|e| GeneratorError::PdfError { message: e.to_string() })?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_ids.len() as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| GeneratorError::PdfError { message: e.to_string() })?;
    Ok(buffer)
}

fn layout(batch: &PostBatch) -> Vec<Vec<Line>> {
    let mut pages = Vec::new();
    let mut header = vec![
        Line::bold(
            format!("Daily Twitter Trading Posts - {}", batch.generated_at.format("%B %d, %Y")),
            TITLE_SIZE,
        ),
        Line::body(format!("Generated at: {}", batch.generated_at.format("%H:%M:%S"))),
        Line::body(""),
    ];

    for post in &batch.posts {
        let mut lines = std::mem::take(&mut header);
        lines.push(Line::bold(format!("{}.", post.number), BODY_SIZE));
        for paragraph in post.content.lines() {
            if paragraph.trim().is_empty() {
                lines.push(Line::body(""));
            } else {
                lines.extend(wrap(paragraph, WRAP_COLUMNS).into_iter().map(Line::body));
            }
        }
        for chunk in lines.chunks(LINES_PER_PAGE) {
            pages.push(chunk.to_vec());
        }
    }

    if pages.is_empty() {
        pages.push(header);
    }
    pages
}

fn page_content(lines: &[Line]) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
    ];
    for line in lines {
        let font = if line.bold { "F2" } else { "F1" };
        operations.push(Operation::new("Tf", vec![font.into(), line.size.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(&line.text))]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

/// Greedy word wrap; words longer than `width` get a line of their own
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() { word.chars().count() } else { current.chars().count() + 1 + word.chars().count() };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Map text onto the WinAnsi code page used by the standard fonts.
/// Characters with no WinAnsi slot become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\t' => b' ',
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Post;

    fn batch(contents: &[&str]) -> PostBatch {
        PostBatch::new(
            contents
                .iter()
                .enumerate()
                .map(|(i, c)| Post::generated(i + 1, c.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_render_produces_pdf_with_one_page_per_post() {
        let bytes = render_batch(&batch(&["First post.", "Second post.", "Third post."])).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_layout_puts_title_on_first_page_only() {
        let pages = layout(&batch(&["a", "b"]));
        assert_eq!(pages.len(), 2);
        assert!(pages[0][0].text.starts_with("Daily Twitter Trading Posts - "));
        assert_eq!(pages[1][0].text, "2.");
    }

    #[test]
    fn test_long_post_spills_onto_next_page() {
        let long = vec!["line"; LINES_PER_PAGE + 5].join("\n");
        let pages = layout(&batch(&[long.as_str()]));
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("aaa bbb ccc ddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("\u{2022} -5%"), vec![0x95, b' ', b'-', b'5', b'%']);
        assert_eq!(encode_win_ansi("caf\u{E9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("\u{1F680}"), vec![b'?']);
    }
}
