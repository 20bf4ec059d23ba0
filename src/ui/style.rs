//! Theming and color definitions.
//!
//! One fixed dark theme: the editor area uses the same `#3c3c3c` background
//! the bitmap-font prototypes shipped with, with plain white text.

use ratatui::style::{Color, Modifier, Style};

/// Editor background.
pub const BACKGROUND: Color = Color::Rgb(0x3c, 0x3c, 0x3c);

/// Style for ordinary document text.
pub fn text() -> Style {
    Style::default().bg(BACKGROUND).fg(Color::White)
}

/// Style for the cursor cell: the glyph under the cursor drawn inverted.
pub fn cursor() -> Style {
    Style::default().bg(Color::White).fg(BACKGROUND)
}

/// Style for the line-number gutter.
pub fn gutter() -> Style {
    Style::default().bg(BACKGROUND).fg(Color::DarkGray)
}

/// Style for the status bar.
pub fn status_bar() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Style for the help overlay title line.
pub fn help_title() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}
