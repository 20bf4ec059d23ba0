/// Minimum capacity allocated on a line's first growth.
///
/// Lines start with no allocation at all; the first insertion jumps straight
/// to this size so that typing into a fresh line does not reallocate on every
/// keystroke.
const LINE_INIT_CAPACITY: usize = 1024;

/// One row of text, stored as an independently growable byte buffer.
///
/// Content is opaque bytes: the editing core never interprets encodings, and
/// the renderer owns the byte-to-glyph mapping. All positional operations
/// clamp the column into `[0, len]` before touching the buffer, so every
/// operation is total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Create an empty line with no allocation.
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create a line holding a copy of `content`.
    pub fn from_bytes(content: &[u8]) -> Self {
        Self {
            bytes: content.to_vec(),
        }
    }

    /// Logical length in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the line holds no content.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Allocated capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// The line's content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The byte at `col`, if `col` is within the content.
    pub fn byte_at(&self, col: usize) -> Option<u8> {
        self.bytes.get(col).copied()
    }

    /// Clamp a column into the valid range `[0, len]`.
    const fn clamp_col(&self, col: usize) -> usize {
        if col > self.bytes.len() {
            self.bytes.len()
        } else {
            col
        }
    }

    /// Grow the buffer until `additional` more bytes fit.
    ///
    /// Capacity jumps to [`LINE_INIT_CAPACITY`] on first growth and doubles
    /// from there. Existing content is preserved across reallocation.
    fn reserve_for(&mut self, additional: usize) {
        let needed = self.bytes.len() + additional;
        if needed <= self.bytes.capacity() {
            return;
        }
        let mut target = self.bytes.capacity().max(LINE_INIT_CAPACITY);
        while target < needed {
            target *= 2;
        }
        self.bytes.reserve_exact(target - self.bytes.len());
    }

    /// Insert `text` before `col`, returning the column just past the
    /// inserted text.
    ///
    /// Inserting empty text leaves the line untouched, allocation included.
    pub fn insert_text_before(&mut self, text: &[u8], col: usize) -> usize {
        let col = self.clamp_col(col);
        if text.is_empty() {
            return col;
        }
        self.reserve_for(text.len());
        self.bytes.splice(col..col, text.iter().copied());
        col + text.len()
    }

    /// Remove the byte before `col` (Backspace), returning the new column.
    ///
    /// No-op at column 0.
    pub fn backspace(&mut self, col: usize) -> usize {
        let col = self.clamp_col(col);
        if col == 0 {
            return col;
        }
        self.bytes.remove(col - 1);
        col - 1
    }

    /// Remove the byte at `col` (Delete). The column itself is the caller's
    /// concern and does not move.
    ///
    /// No-op at or past end of line.
    pub fn delete(&mut self, col: usize) {
        let col = self.clamp_col(col);
        if col < self.bytes.len() {
            self.bytes.remove(col);
        }
    }

    /// Split the line at `col`: the suffix `[col, len)` is moved into the
    /// returned line, this line keeps the prefix.
    pub fn split_off(&mut self, col: usize) -> Self {
        let col = self.clamp_col(col);
        Self {
            bytes: self.bytes.split_off(col),
        }
    }

    /// Append another line's content to the end of this one.
    pub fn append(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        self.reserve_for(other.len());
        self.bytes.extend_from_slice(&other.bytes);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // --- Insertion ---

    #[test]
    fn test_insert_into_empty_line() {
        let mut line = Line::new();
        let col = line.insert_text_before(b"hello", 0);
        assert_eq!(line.as_bytes(), b"hello");
        assert_eq!(col, 5);
    }

    #[test]
    fn test_insert_in_middle_shifts_tail() {
        let mut line = Line::from_bytes(b"hd");
        let col = line.insert_text_before(b"ello worl", 1);
        assert_eq!(line.as_bytes(), b"hello world");
        assert_eq!(col, 10);
    }

    #[test]
    fn test_insert_clamps_column_past_end() {
        let mut line = Line::from_bytes(b"abc");
        let col = line.insert_text_before(b"!", 99);
        assert_eq!(line.as_bytes(), b"abc!");
        assert_eq!(col, 4);
    }

    #[test]
    fn test_insert_empty_text_is_noop() {
        let mut line = Line::from_bytes(b"abc");
        let cap_before = line.capacity();
        let col = line.insert_text_before(b"", 2);
        assert_eq!(line.as_bytes(), b"abc");
        assert_eq!(line.capacity(), cap_before);
        assert_eq!(col, 2);
    }

    #[test]
    fn test_insert_empty_text_clamps_returned_column() {
        let mut line = Line::from_bytes(b"abc");
        assert_eq!(line.insert_text_before(b"", 99), 3);
    }

    // --- Capacity policy ---

    #[test]
    fn test_new_line_has_no_allocation() {
        let line = Line::new();
        assert_eq!(line.capacity(), 0);
    }

    #[test]
    fn test_first_growth_jumps_to_minimum() {
        let mut line = Line::new();
        line.insert_text_before(b"x", 0);
        assert!(line.capacity() >= LINE_INIT_CAPACITY);
    }

    #[test]
    fn test_capacity_doubles_until_sufficient() {
        let mut line = Line::new();
        let big = vec![b'a'; LINE_INIT_CAPACITY * 3];
        line.insert_text_before(&big, 0);
        assert!(line.capacity() >= LINE_INIT_CAPACITY * 4);
        assert_eq!(line.len(), LINE_INIT_CAPACITY * 3);
    }

    #[test]
    fn test_growth_preserves_content() {
        let mut line = Line::new();
        let mut expected = Vec::new();
        for i in 0..200u32 {
            let chunk = format!("chunk{i} ");
            // Alternate between appending and prepending to exercise both
            // ends of the buffer across reallocations.
            if i % 2 == 0 {
                line.insert_text_before(chunk.as_bytes(), line.len());
                expected.extend_from_slice(chunk.as_bytes());
            } else {
                line.insert_text_before(chunk.as_bytes(), 0);
                expected.splice(0..0, chunk.bytes());
            }
        }
        assert_eq!(line.as_bytes(), expected.as_slice());
    }

    // --- Backspace ---

    #[test]
    fn test_backspace_removes_byte_before_column() {
        let mut line = Line::from_bytes(b"hello");
        let col = line.backspace(5);
        assert_eq!(line.as_bytes(), b"hell");
        assert_eq!(col, 4);
    }

    #[test]
    fn test_backspace_at_column_zero_is_noop() {
        let mut line = Line::from_bytes(b"hello");
        let col = line.backspace(0);
        assert_eq!(line.as_bytes(), b"hello");
        assert_eq!(col, 0);
    }

    #[test]
    fn test_backspace_on_empty_line_is_noop() {
        let mut line = Line::new();
        assert_eq!(line.backspace(3), 0);
        assert!(line.is_empty());
    }

    #[test]
    fn test_backspace_clamps_column_past_end() {
        let mut line = Line::from_bytes(b"ab");
        let col = line.backspace(99);
        assert_eq!(line.as_bytes(), b"a");
        assert_eq!(col, 1);
    }

    // --- Delete ---

    #[test]
    fn test_delete_removes_byte_at_column() {
        let mut line = Line::from_bytes(b"abc");
        line.delete(1);
        assert_eq!(line.as_bytes(), b"ac");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut line = Line::from_bytes(b"abc");
        line.delete(3);
        assert_eq!(line.as_bytes(), b"abc");
    }

    #[test]
    fn test_delete_past_end_behaves_like_delete_at_end() {
        let mut line = Line::from_bytes(b"abc");
        line.delete(99);
        assert_eq!(line.as_bytes(), b"abc");
    }

    // --- Split / append ---

    #[test]
    fn test_split_off_moves_suffix() {
        let mut line = Line::from_bytes(b"hello world");
        let tail = line.split_off(5);
        assert_eq!(line.as_bytes(), b"hello");
        assert_eq!(tail.as_bytes(), b" world");
    }

    #[test]
    fn test_split_off_at_end_yields_empty_tail() {
        let mut line = Line::from_bytes(b"abc");
        let tail = line.split_off(3);
        assert_eq!(line.as_bytes(), b"abc");
        assert!(tail.is_empty());
    }

    #[test]
    fn test_append_concatenates() {
        let mut line = Line::from_bytes(b"ab");
        line.append(&Line::from_bytes(b"cd"));
        assert_eq!(line.as_bytes(), b"abcd");
    }

    // --- byte_at ---

    #[test]
    fn test_byte_at_within_content() {
        let line = Line::from_bytes(b"abc");
        assert_eq!(line.byte_at(1), Some(b'b'));
    }

    #[test]
    fn test_byte_at_past_end_is_none() {
        let line = Line::from_bytes(b"abc");
        assert_eq!(line.byte_at(3), None);
    }

    // --- Properties ---

    proptest! {
        #[test]
        fn prop_insert_empty_leaves_line_unchanged(
            content in prop::collection::vec(any::<u8>(), 0..64),
            col in 0usize..80,
        ) {
            let mut line = Line::from_bytes(&content);
            line.insert_text_before(b"", col);
            prop_assert_eq!(line.as_bytes(), content.as_slice());
        }

        #[test]
        fn prop_insert_then_delete_round_trips(
            content in prop::collection::vec(any::<u8>(), 0..64),
            text in prop::collection::vec(any::<u8>(), 1..16),
            col in 0usize..80,
        ) {
            let original = Line::from_bytes(&content);
            let mut line = original.clone();
            let col = line.insert_text_before(&text, col) - text.len();
            for _ in 0..text.len() {
                line.delete(col);
            }
            prop_assert_eq!(line, original);
        }

        #[test]
        fn prop_clamped_column_matches_end_column(
            content in prop::collection::vec(any::<u8>(), 0..32),
            text in prop::collection::vec(any::<u8>(), 0..8),
            excess in 1usize..16,
        ) {
            // Any column past the end behaves exactly like the end column.
            let mut at_end = Line::from_bytes(&content);
            let mut past_end = Line::from_bytes(&content);
            let end = content.len();

            let col_a = at_end.insert_text_before(&text, end);
            let col_b = past_end.insert_text_before(&text, end + excess);
            prop_assert_eq!(&at_end, &past_end);
            prop_assert_eq!(col_a, col_b);

            let col_a = at_end.backspace(at_end.len());
            let col_b = past_end.backspace(past_end.len() + excess);
            prop_assert_eq!(&at_end, &past_end);
            prop_assert_eq!(col_a, col_b);

            at_end.delete(at_end.len());
            past_end.delete(past_end.len() + excess);
            prop_assert_eq!(at_end, past_end);
        }

        #[test]
        fn prop_incremental_inserts_never_lose_bytes(
            chunks in prop::collection::vec(
                prop::collection::vec(any::<u8>(), 0..512),
                0..8,
            ),
        ) {
            let mut line = Line::new();
            let mut expected: Vec<u8> = Vec::new();
            for chunk in &chunks {
                line.insert_text_before(chunk, line.len());
                expected.extend_from_slice(chunk);
            }
            prop_assert_eq!(line.as_bytes(), expected.as_slice());
        }
    }
}
