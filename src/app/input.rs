use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, Message, Model};
use crate::editor::{Command, Direction};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize.queue", format!("width={w} height={h}"));
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        // Any key dismisses the help overlay.
        if model.help_visible {
            let _ = key;
            return Some(Message::HideHelp);
        }

        match key.code {
            // Application
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::ToggleGutter)
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Redraw)
            }
            KeyCode::Esc => Some(Message::Quit),
            KeyCode::F(1) => Some(Message::ToggleHelp),

            // Editing
            KeyCode::Enter => Some(Message::Edit(Command::NewLine)),
            KeyCode::Backspace => Some(Message::Edit(Command::Backspace)),
            KeyCode::Delete => Some(Message::Edit(Command::Delete)),

            // Cursor
            KeyCode::Left => Some(Message::Edit(Command::MoveCursor(Direction::Left))),
            KeyCode::Right => Some(Message::Edit(Command::MoveCursor(Direction::Right))),
            KeyCode::Up => Some(Message::Edit(Command::MoveCursor(Direction::Up))),
            KeyCode::Down => Some(Message::Edit(Command::MoveCursor(Direction::Down))),
            KeyCode::Home => Some(Message::Edit(Command::MoveHome)),
            KeyCode::End => Some(Message::Edit(Command::MoveEnd)),

            // Text input
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::Edit(Command::InsertText(c.to_string())))
            }

            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if model.help_visible {
                    return Some(Message::HideHelp);
                }
                // Clicks on the status bar row are ignored.
                if mouse.row >= model.viewport.height() {
                    return None;
                }
                let row = model.viewport.offset() + mouse.row as usize;
                let col = mouse.column.saturating_sub(crate::ui::gutter_columns(model)) as usize;
                Some(Message::Edit(Command::MoveTo(row, col)))
            }
            MouseEventKind::ScrollDown => {
                if model.viewport.can_scroll_down() {
                    Some(Message::ScrollDown(3))
                } else {
                    None
                }
            }
            MouseEventKind::ScrollUp => {
                if model.viewport.can_scroll_up() {
                    Some(Message::ScrollUp(3))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
