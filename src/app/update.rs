use crate::app::Model;
use crate::editor::Command;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A discrete editing command routed to the editor core
    Edit(Command),

    // Viewport
    /// Scroll up by n rows without moving the cursor
    ScrollUp(usize),
    /// Scroll down by n rows without moving the cursor
    ScrollDown(usize),

    // Overlays
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Toggle the line-number gutter
    ToggleGutter,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Edit(command) => {
            model.editor.apply(&command);
            model.sync_viewport();
        }

        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),

        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::ToggleGutter => model.gutter_visible = !model.gutter_visible,

        Message::Resize(width, height) => {
            // Bottom row stays reserved for the status bar.
            model.viewport.resize(width, height.saturating_sub(1));
            let (row, _) = model.editor.cursor_position();
            model.viewport.ensure_row_visible(row);
        }
        Message::Redraw => {}

        Message::Quit => model.should_quit = true,
    }

    model
}
