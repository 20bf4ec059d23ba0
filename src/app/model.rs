use std::path::PathBuf;

use crate::editor::Editor;
use crate::ui::viewport::Viewport;

/// The complete application state.
///
/// All state lives here - no global or scattered state. The prototypes this
/// editor grew out of kept the buffer and cursor in process-wide variables;
/// here one owned value is threaded through `update` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The document being edited
    pub editor: Editor,
    /// Viewport managing scroll position over the document rows
    pub viewport: Viewport,
    /// Whether the line-number gutter is drawn
    pub gutter_visible: bool,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a model over an editor, sized to the terminal.
    ///
    /// The bottom row is reserved for the status bar; the viewport gets the
    /// rest.
    pub fn new(editor: Editor, terminal_size: (u16, u16)) -> Self {
        let (width, height) = terminal_size;
        let viewport = Viewport::new(width, height.saturating_sub(1), editor.row_count());
        Self {
            editor,
            viewport,
            gutter_visible: true,
            help_visible: false,
            config_global_path: None,
            should_quit: false,
        }
    }

    /// Re-sync the viewport with the document shape and keep the cursor row
    /// on screen. Called after every editing command.
    pub fn sync_viewport(&mut self) {
        self.viewport.set_total_rows(self.editor.row_count());
        let (row, _) = self.editor.cursor_position();
        self.viewport.ensure_row_visible(row);
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Editor::new(), (80, 24))
    }
}
