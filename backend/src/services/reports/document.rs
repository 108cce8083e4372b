//! genpdf building blocks shared by the class summary and the student report.

use super::error::ReportError;
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::Style;
use genpdf::{Alignment, Document, Element, SimplePageDecorator};
use std::path::Path;

const BODY_FONT_SIZE: u8 = 10;
const TITLE_FONT_SIZE: u8 = 14;
const FOOTER_FONT_SIZE: u8 = 8;
const MARGIN_MM: i32 = 15;

/// Families looked up in the fonts directory, first match wins. Each needs
/// `<name>-Regular.ttf`, `-Bold`, `-Italic` and `-BoldItalic`.
const FONT_FAMILIES: [&str; 3] = ["Arial", "LiberationSans", "DejaVuSans"];

fn load_font(fonts_dir: &Path) -> Result<FontFamily<FontData>, ReportError> {
    let mut last_error = String::new();
    for name in FONT_FAMILIES {
        match genpdf::fonts::from_files(fonts_dir, name, None) {
            Ok(family) => return Ok(family),
            Err(e) => last_error = e.to_string(),
        }
    }
    Err(ReportError::Font {
        dir: fonts_dir.to_path_buf(),
        message: last_error,
    })
}

/// Configure and return a genpdf Document with font, margins and page numbers.
pub fn configure_document(fonts_dir: &Path, title: &str) -> Result<Document, ReportError> {
    let font_family = load_font(fonts_dir)?;
    let mut doc = Document::new(font_family);
    doc.set_title(title);
    doc.set_font_size(BODY_FONT_SIZE);
    doc.set_line_spacing(1.25);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(MARGIN_MM);
    decorator.set_header(|page| {
        Paragraph::new(format!("Halaman {}", page))
            .aligned(Alignment::Right)
            .styled(Style::new().with_font_size(FOOTER_FONT_SIZE))
    });
    doc.set_page_decorator(decorator);
    Ok(doc)
}

pub fn push_title(doc: &mut Document, title: &str) {
    doc.push(
        Paragraph::new(title)
            .aligned(Alignment::Center)
            .styled(Style::new().bold().with_font_size(TITLE_FONT_SIZE)),
    );
    doc.push(Break::new(1));
}

/// Table with a frame around every cell and a bold header row.
pub fn table_with_header(weights: Vec<usize>, columns: &[&str]) -> Result<TableLayout, ReportError> {
    let mut table = TableLayout::new(weights);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));
    let mut row = table.row();
    for column in columns {
        row.push_element(
            Paragraph::new(*column)
                .styled(Style::new().bold())
                .padded(1),
        );
    }
    row.push()?;
    Ok(table)
}

pub fn cell(text: String) -> impl Element {
    Paragraph::new(text).padded(1)
}

pub fn render_to_bytes(doc: Document) -> Result<Vec<u8>, ReportError> {
    let mut buffer = Vec::new();
    doc.render(&mut buffer)?;
    Ok(buffer)
}
