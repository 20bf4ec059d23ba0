use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;

use super::{overlays, status, style};

/// Render the complete UI: document rows, status bar, optional help overlay.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    let document_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    render_document(model, frame, document_area);
    status::render_status_bar(model, frame, status_area);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

/// Columns consumed by the line-number gutter, trailing space included.
/// 0 when the gutter is hidden.
pub fn gutter_columns(model: &Model) -> u16 {
    if model.gutter_visible {
        line_number_width(model.editor.row_count()) + 1
    } else {
        0
    }
}

fn render_document(model: &Model, frame: &mut Frame, area: Rect) {
    let (cursor_row, cursor_col) = model.editor.cursor_position();
    let gutter_width = line_number_width(model.editor.row_count()) as usize;

    let mut content: Vec<Line> = Vec::new();
    for row in model.viewport.visible_range() {
        let bytes = model.editor.line_at(row).unwrap_or_default();

        let mut spans: Vec<Span> = Vec::new();
        if model.gutter_visible {
            spans.push(Span::styled(
                format!("{:>gutter_width$} ", row + 1),
                style::gutter(),
            ));
        }

        if row == cursor_row {
            // Split the row around the cursor cell so it can be inverted.
            // Columns are byte offsets; a byte that is not valid UTF-8 on
            // its own renders as the replacement glyph.
            let col = cursor_col.min(bytes.len());
            let before = String::from_utf8_lossy(&bytes[..col]);
            let under = model
                .editor
                .char_under_cursor()
                .map_or_else(|| " ".to_string(), |b| lossy_cell(b));
            let after = if col < bytes.len() {
                String::from_utf8_lossy(&bytes[col + 1..])
            } else {
                "".into()
            };

            if !before.is_empty() {
                spans.push(Span::styled(before.into_owned(), style::text()));
            }
            spans.push(Span::styled(under, style::cursor()));
            if !after.is_empty() {
                spans.push(Span::styled(after.into_owned(), style::text()));
            }
        } else {
            spans.push(Span::styled(
                String::from_utf8_lossy(bytes).into_owned(),
                style::text(),
            ));
        }

        content.push(Line::from(spans));
    }

    let doc = Paragraph::new(content).style(style::text());
    frame.render_widget(Clear, area);
    frame.render_widget(doc, area);
}

/// One byte as a display cell, replacement glyph for non-UTF-8 bytes.
fn lossy_cell(byte: u8) -> String {
    String::from_utf8_lossy(&[byte]).into_owned()
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_rows: usize) -> u16 {
    if total_rows < 10 {
        1
    } else if total_rows < 100 {
        2
    } else if total_rows < 1_000 {
        3
    } else if total_rows < 10_000 {
        4
    } else if total_rows < 100_000 {
        5
    } else {
        6
    }
}
