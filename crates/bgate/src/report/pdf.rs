//! Paginated PDF rendering of report text.
//!
//! Lines are drawn top-down on US-letter pages with a fixed leading; when the
//! vertical space is exhausted a new page starts. Overlong lines are truncated
//! rather than wrapped.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN_X: i64 = 50;
const TOP_Y: i64 = PAGE_HEIGHT - 50;
const MIN_Y: i64 = 60;
const LEADING: i64 = 14;
const FONT_SIZE: i64 = 11;
const MAX_LINE_CHARS: usize = 110;

const LINES_PER_PAGE: usize = ((TOP_Y - MIN_Y) / LEADING) as usize + 1;

/// Build the paginated document for `text`. Always yields at least one page.
pub fn render_pdf(text: &str) -> Result<Document, lopdf::Error> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Times-Roman",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        lines.push("");
    }

    let mut kids: Vec<Object> = Vec::new();
    for page_lines in lines.chunks(LINES_PER_PAGE) {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("TL", vec![LEADING.into()]),
            Operation::new("Td", vec![MARGIN_X.into(), TOP_Y.into()]),
        ];
        for (index, line) in page_lines.iter().enumerate() {
            if index > 0 {
                operations.push(Operation::new("T*", vec![]));
            }
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(sanitize_line(line))],
            ));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let stream_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => stream_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    Ok(doc)
}

// Type1 StandardEncoding: keep the stream ASCII.
fn sanitize_line(line: &str) -> String {
    line.chars()
        .take(MAX_LINE_CHARS)
        .map(|c| if c.is_ascii() { c } else { '-' })
        .collect()
}
