use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

use super::style;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let (row, col) = model.editor.cursor_position();
    let rows = model.editor.row_count();
    let line_word = if rows == 1 { "line" } else { "lines" };

    let status = format!(
        " ted  Ln {}, Col {}  {} {}  F1:help  Esc:quit",
        row + 1,
        col + 1,
        rows,
        line_word
    );

    let status_bar = Paragraph::new(status).style(style::status_bar());
    frame.render_widget(status_bar, area);
}
