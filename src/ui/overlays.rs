use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

use super::style;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup = centered_popup_rect(48, 20, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut all_lines: Vec<Line> = Vec::new();

    all_lines.push(Line::styled("Editing", section_style));
    all_lines.push(Line::raw("  type                Insert text"));
    all_lines.push(Line::raw("  Enter               Split line"));
    all_lines.push(Line::raw("  Backspace / Delete  Delete back / forward"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Cursor", section_style));
    all_lines.push(Line::raw("  Arrows              Move"));
    all_lines.push(Line::raw("  Home / End          Line start / end"));
    all_lines.push(Line::raw("  Click               Place cursor"));
    all_lines.push(Line::raw("  Wheel               Scroll view"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Application", section_style));
    all_lines.push(Line::raw("  F1                  This help"));
    all_lines.push(Line::raw("  Ctrl-G              Toggle gutter"));
    all_lines.push(Line::raw("  Ctrl-L              Redraw"));
    all_lines.push(Line::raw("  Esc / Ctrl-C        Quit"));
    all_lines.push(Line::raw(""));
    all_lines.push(Line::styled(format!("config: {global_cfg}"), dim_style));

    let block = Block::default()
        .title(Span::styled(" ted keys ", style::help_title()))
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1));

    let help = Paragraph::new(all_lines).block(block);
    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
