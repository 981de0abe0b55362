//! PDF rendering of a [`ReportLayout`].
//!
//! A4 portrait, built-in Helvetica, 12pt. A line cursor walks down the
//! page and a fresh page is added whenever it passes the bottom margin.
//! Pagination is the only layout logic here; everything content-shaped
//! lives in [`crate::layout`].

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};

use stockcast_core::{ForecastError, ForecastResult};

use crate::layout::{GridLayout, ListLayout, ReportLayout};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 10.0;
const TOP_Y_MM: f32 = 280.0;
const BOTTOM_MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const GRID_CELL_WIDTH_MM: f32 = 38.0;
const FONT_SIZE_PT: f32 = 12.0;

// Rough average glyph advance for 12pt Helvetica; only used to center the
// title, so precision does not matter.
const APPROX_CHAR_WIDTH_MM: f32 = 2.4;

/// Render a laid-out report to PDF bytes.
pub fn render(layout: &ReportLayout) -> ForecastResult<Vec<u8>> {
    let title = match layout {
        ReportLayout::Grid(grid) => grid.title.as_str(),
        ReportLayout::List(list) => list.title.as_str(),
    };

    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ForecastError::render(e.to_string()))?;

    {
        let mut writer = PageWriter {
            doc: &doc,
            font: &font,
            layer: doc.get_page(page).get_layer(layer),
            y: TOP_Y_MM,
        };

        writer.centered_line(title);
        writer.y -= LINE_HEIGHT_MM; // blank line after the title

        match layout {
            ReportLayout::Grid(grid) => writer.grid(grid),
            ReportLayout::List(list) => writer.list(list),
        }
    }

    let mut bytes: Vec<u8> = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(|e| ForecastError::render(e.to_string()))?;

    tracing::debug!(size = bytes.len(), "rendered pdf report");
    Ok(bytes)
}

/// Line cursor over a growing document.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    font: &'a IndirectFontRef,
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    /// Auto page break: runs before each line is placed.
    fn break_page_if_full(&mut self) {
        if self.y < BOTTOM_MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y_MM;
        }
    }

    fn centered_line(&mut self, text: &str) {
        let width = text.chars().count() as f32 * APPROX_CHAR_WIDTH_MM;
        let x = ((PAGE_WIDTH_MM - width) / 2.0).max(LEFT_MARGIN_MM);
        self.text_line(text, x);
    }

    fn text_line(&mut self, text: &str, x: f32) {
        self.break_page_if_full();
        self.layer
            .use_text(text, FONT_SIZE_PT, Mm(x), Mm(self.y), self.font);
        self.y -= LINE_HEIGHT_MM;
    }

    fn list(&mut self, layout: &ListLayout) {
        for line in &layout.lines {
            self.text_line(line, LEFT_MARGIN_MM);
        }
    }

    fn grid(&mut self, layout: &GridLayout) {
        self.cell_row(&layout.header);
        for row in &layout.rows {
            self.cell_row(row);
        }
    }

    /// One row of bordered fixed-width cells sharing a baseline.
    fn cell_row(&mut self, cells: &[String]) {
        self.break_page_if_full();
        let mut x = LEFT_MARGIN_MM;
        for cell in cells {
            self.cell_border(x, self.y);
            self.layer
                .use_text(cell.as_str(), FONT_SIZE_PT, Mm(x + 2.0), Mm(self.y), self.font);
            x += GRID_CELL_WIDTH_MM;
        }
        self.y -= LINE_HEIGHT_MM;
    }

    /// Cell rectangle around the text baseline at (x, baseline_y).
    fn cell_border(&self, x: f32, baseline_y: f32) {
        let top = baseline_y + 7.0;
        let bottom = baseline_y - 3.0;
        let right = x + GRID_CELL_WIDTH_MM;
        let outline = Line {
            points: vec![
                (Point::new(Mm(x), Mm(top)), false),
                (Point::new(Mm(right), Mm(top)), false),
                (Point::new(Mm(right), Mm(bottom)), false),
                (Point::new(Mm(x), Mm(bottom)), false),
            ],
            is_closed: true,
        };
        self.layer.add_line(outline);
    }
}
