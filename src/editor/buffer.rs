use super::line::Line;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete editing command, as delivered by the input layer.
///
/// Commands are the whole boundary between the host event loop and the
/// editing core: one command is fully applied before the next one (or a
/// render pass) is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert text before the cursor. Content is opaque bytes to the core.
    InsertText(String),
    /// Delete the byte before the cursor, merging rows at column 0.
    Backspace,
    /// Delete the byte under the cursor, merging rows at end of line.
    Delete,
    /// Split the cursor row at the cursor column.
    NewLine,
    /// Move the cursor one cell in a direction.
    MoveCursor(Direction),
    /// Move the cursor to the beginning of its row.
    MoveHome,
    /// Move the cursor to the end of its row.
    MoveEnd,
    /// Move the cursor to an absolute (row, col), clamped into the document.
    MoveTo(usize, usize),
}

/// The document model: an ordered sequence of [`Line`]s plus a 2-D cursor.
///
/// There is always at least one row, so content operations never have to
/// synthesize one. Every operation is total: out-of-range cursor positions
/// are clamped, impossible edits are no-ops, and nothing returns an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    lines: Vec<Line>,
    cursor_row: usize,
    cursor_col: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor holding a single empty row, cursor at the origin.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    /// Create an editor from existing text, one row per `\n`-separated line.
    /// The cursor starts at the origin.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text
                .split('\n')
                .map(|l| Line::from_bytes(l.as_bytes()))
                .collect(),
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    // --- Render query surface ---

    /// Number of rows in the document. Never 0.
    pub const fn row_count(&self) -> usize {
        self.lines.len()
    }

    /// Content of one row, if `row` is in range.
    pub fn line_at(&self, row: usize) -> Option<&[u8]> {
        self.lines.get(row).map(Line::as_bytes)
    }

    /// Current cursor position as (row, col).
    pub const fn cursor_position(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// The byte under the cursor, or `None` when the cursor sits past the
    /// end of its row. The renderer draws an inverted glyph from this.
    pub fn char_under_cursor(&self) -> Option<u8> {
        self.lines.get(self.cursor_row)?.byte_at(self.cursor_col)
    }

    /// The whole document as text, rows joined with `\n`. Undecodable bytes
    /// come out as replacement characters.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| String::from_utf8_lossy(l.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // --- Editing commands ---

    /// Apply one discrete command.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::InsertText(text) => self.insert_text_before_cursor(text.as_bytes()),
            Command::Backspace => self.backspace(),
            Command::Delete => self.delete(),
            Command::NewLine => self.insert_new_line(),
            Command::MoveCursor(direction) => self.move_cursor(*direction),
            Command::MoveHome => self.move_home(),
            Command::MoveEnd => self.move_end(),
            Command::MoveTo(row, col) => self.move_to(*row, *col),
        }
    }

    /// Insert `text` before the cursor; the cursor advances past it.
    pub fn insert_text_before_cursor(&mut self, text: &[u8]) {
        self.normalize_cursor();
        self.cursor_col = self.lines[self.cursor_row].insert_text_before(text, self.cursor_col);
    }

    /// Delete backwards. At column 0 the cursor row is merged into the
    /// previous one and the cursor lands at the join point.
    pub fn backspace(&mut self) {
        self.normalize_cursor();
        if self.cursor_col == 0 {
            if self.cursor_row > 0 {
                let removed = self.lines.remove(self.cursor_row);
                self.cursor_row -= 1;
                let prev = &mut self.lines[self.cursor_row];
                self.cursor_col = prev.len();
                prev.append(&removed);
            }
        } else {
            self.cursor_col = self.lines[self.cursor_row].backspace(self.cursor_col);
        }
    }

    /// Delete forwards. At end of row the next row is merged onto this one.
    /// The cursor does not move.
    pub fn delete(&mut self) {
        self.normalize_cursor();
        if self.cursor_col == self.lines[self.cursor_row].len() {
            if self.cursor_row + 1 < self.lines.len() {
                let next = self.lines.remove(self.cursor_row + 1);
                self.lines[self.cursor_row].append(&next);
            }
        } else {
            self.lines[self.cursor_row].delete(self.cursor_col);
        }
    }

    /// Split the cursor row at the cursor column (Enter). The suffix becomes
    /// a new row right below and the cursor moves to its start.
    pub fn insert_new_line(&mut self) {
        self.normalize_cursor();
        let tail = self.lines[self.cursor_row].split_off(self.cursor_col);
        self.cursor_row += 1;
        self.cursor_col = 0;
        self.lines.insert(self.cursor_row, tail);
    }

    // --- Cursor movement ---

    /// Move the cursor one cell.
    ///
    /// Left/Right stay within the current row. Up/Down clamp the column to
    /// the destination row's length; rows are never created or removed here.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.normalize_cursor();
        match direction {
            Direction::Left => self.cursor_col = self.cursor_col.saturating_sub(1),
            Direction::Right => {
                if self.cursor_col < self.lines[self.cursor_row].len() {
                    self.cursor_col += 1;
                }
            }
            Direction::Up => {
                if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.clamp_col_to_row();
                }
            }
            Direction::Down => {
                if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.clamp_col_to_row();
                }
            }
        }
    }

    /// Move the cursor to the beginning of its row (Home).
    pub fn move_home(&mut self) {
        self.normalize_cursor();
        self.cursor_col = 0;
    }

    /// Move the cursor to the end of its row (End).
    pub fn move_end(&mut self) {
        self.normalize_cursor();
        self.cursor_col = self.lines[self.cursor_row].len();
    }

    /// Move the cursor to an absolute position, clamped into the document.
    /// Used for mouse clicks.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor_row = row.min(self.lines.len() - 1);
        self.cursor_col = col.min(self.lines[self.cursor_row].len());
    }

    // --- Private helpers ---

    /// Clamp the cursor onto real content: row into `[0, rows)`, then column
    /// into `[0, row_len]`. Every operation runs this first, so no transient
    /// out-of-range cursor survives a command.
    fn normalize_cursor(&mut self) {
        if self.cursor_row >= self.lines.len() {
            self.cursor_row = self.lines.len() - 1;
        }
        self.clamp_col_to_row();
    }

    fn clamp_col_to_row(&mut self) {
        let len = self.lines[self.cursor_row].len();
        if self.cursor_col > len {
            self.cursor_col = len;
        }
    }
}
