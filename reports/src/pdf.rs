use std::ops::Range;

use chrono::NaiveDateTime;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
    path::PaintMode,
};
use tracing::debug;
use travessia_core::VesselRecord;

use crate::{
    HEADERS, REPORT_TITLE, ReportRow,
    error::Result,
    font_metrics::{Face, PT_TO_MM},
};

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 14.0;

const TITLE_Y: f32 = 15.0;
const TITLE_SIZE: f32 = 16.0;
const INFO_SIZE: f32 = 10.0;
const TABLE_START_Y: f32 = 32.0;

const CELL_TEXT_SIZE: f32 = 9.0;
const CELL_PADDING: f32 = 3.0;
const ROW_HEIGHT: f32 = 9.0;
const LINE_HEIGHT: f32 = CELL_TEXT_SIZE * 1.15 * PT_TO_MM;
const COLUMN_WIDTHS: [f32; 5] = [50.0, 35.0, 30.0, 25.0, 40.0];

const HEADER_FILL: (u8, u8, u8) = (102, 126, 234);
const ALTERNATE_FILL: (u8, u8, u8) = (245, 245, 245);
const WHITE: (u8, u8, u8) = (255, 255, 255);
const BLACK: (u8, u8, u8) = (0, 0, 0);

const ELLIPSIS: &str = "...";

const GENERATED_AT_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Header cells wrapped into lines that fit their columns.
struct Header {
    cells: Vec<Vec<String>>,
    height: f32,
}

/// Renders the records as an A4 landscape table, `generated_at` is printed below the title.
#[tracing::instrument(skip_all, fields(records = records.len()))]
pub fn render(records: &[VesselRecord], generated_at: NaiveDateTime) -> Result<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new(REPORT_TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };

    let header = Header::new();
    let pages = paginate(records.len(), header.height);

    let first = doc.get_page(page).get_layer(layer);
    set_fill(&first, BLACK);
    first.use_text(
        REPORT_TITLE,
        TITLE_SIZE,
        Mm(MARGIN),
        from_top(TITLE_Y),
        &fonts.bold,
    );
    first.use_text(
        format!("Gerado em: {}", generated_at.format(GENERATED_AT_FORMAT)),
        INFO_SIZE,
        Mm(MARGIN),
        from_top(TITLE_Y + 7.0),
        &fonts.regular,
    );
    first.use_text(
        format!("Total de registros: {}", records.len()),
        INFO_SIZE,
        Mm(MARGIN),
        from_top(TITLE_Y + 12.0),
        &fonts.regular,
    );

    let mut layer = first;
    for (page_index, rows) in pages.iter().enumerate() {
        if page_index > 0 {
            let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(page).get_layer(new_layer);
        }

        let mut y = TABLE_START_Y;
        header.draw(&layer, &fonts.bold, y);
        y += header.height;

        for i in rows.clone() {
            if i % 2 == 1 {
                fill_row(&layer, y, ROW_HEIGHT, ALTERNATE_FILL);
            }

            set_fill(&layer, BLACK);
            let cells = ReportRow::from(&records[i]).cells();
            let baseline = from_top(y + ROW_HEIGHT - CELL_PADDING);

            for (text, x, width) in columns().zip(cells.iter()).map(|((x, w), t)| (t, x, w)) {
                layer.use_text(
                    fit_to_width(text, width, Face::Regular, CELL_TEXT_SIZE),
                    CELL_TEXT_SIZE,
                    Mm(x + CELL_PADDING),
                    baseline,
                    &fonts.regular,
                );
            }
            y += ROW_HEIGHT;
        }
    }

    debug!(pages = pages.len(), "rendered pdf report");

    Ok(doc.save_to_bytes()?)
}

impl Header {
    fn new() -> Self {
        let cells: Vec<_> = HEADERS
            .iter()
            .zip(columns())
            .map(|(h, (_, width))| wrap_to_width(h, width, Face::Bold, CELL_TEXT_SIZE))
            .collect();

        let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);

        Self {
            cells,
            height: ROW_HEIGHT + (lines - 1) as f32 * LINE_HEIGHT,
        }
    }

    fn draw(&self, layer: &PdfLayerReference, font: &IndirectFontRef, y: f32) {
        fill_row(layer, y, self.height, HEADER_FILL);
        set_fill(layer, WHITE);

        for (lines, (x, _)) in self.cells.iter().zip(columns()) {
            for (i, line) in lines.iter().enumerate() {
                layer.use_text(
                    line.as_str(),
                    CELL_TEXT_SIZE,
                    Mm(x + CELL_PADDING),
                    from_top(y + ROW_HEIGHT - CELL_PADDING + i as f32 * LINE_HEIGHT),
                    font,
                );
            }
        }
    }
}

/// Left edge and usable text width of every column.
fn columns() -> impl Iterator<Item = (f32, f32)> {
    COLUMN_WIDTHS.iter().scan(MARGIN, |x, width| {
        let left = *x;
        *x += width;
        Some((left, width - 2.0 * CELL_PADDING))
    })
}

/// Splits `rows` record rows into pages. Every page starts its table at the same offset
/// below a header of `header_height`, an empty table still gets a page.
fn paginate(rows: usize, header_height: f32) -> Vec<Range<usize>> {
    let available = PAGE_HEIGHT - MARGIN - TABLE_START_Y - header_height;
    let per_page = ((available / ROW_HEIGHT).floor() as usize).max(1);

    if rows == 0 {
        return vec![0..0];
    }

    (0..rows)
        .step_by(per_page)
        .map(|start| start..(start + per_page).min(rows))
        .collect()
}

fn fill_row(layer: &PdfLayerReference, y: f32, height: f32, color: (u8, u8, u8)) {
    let width: f32 = COLUMN_WIDTHS.iter().sum();

    set_fill(layer, color);
    layer.add_rect(
        Rect::new(
            Mm(MARGIN),
            from_top(y + height),
            Mm(MARGIN + width),
            from_top(y),
        )
        .with_mode(PaintMode::Fill),
    );
}

fn set_fill(layer: &PdfLayerReference, (r, g, b): (u8, u8, u8)) {
    layer.set_fill_color(Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    )));
}

/// Converts a distance from the top edge into a PDF y coordinate.
fn from_top(y: f32) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

/// Truncates `text` with an ellipsis when it is wider than `width` millimeters.
fn fit_to_width(text: &str, width: f32, face: Face, font_size: f32) -> String {
    if face.text_width(text, font_size) <= width {
        return text.to_string();
    }

    let budget = width - face.text_width(ELLIPSIS, font_size);

    let mut used = 0.0;
    let mut fitted = String::new();
    for c in text.chars() {
        used += face.char_width(c, font_size);
        if used > budget {
            break;
        }
        fitted.push(c);
    }
    fitted.push_str(ELLIPSIS);
    fitted
}

/// Breaks `text` into lines at word boundaries so that each line fits in `width`.
/// Only a single word wider than the column is truncated.
fn wrap_to_width(text: &str, width: f32, face: Face, font_size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if face.text_width(&format!("{line} {word}"), font_size) <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
        .into_iter()
        .map(|l| fit_to_width(&l, width, face, font_size))
        .collect()
}
