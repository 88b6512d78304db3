use crate::text_buffer::TextBuffer;

/// Columns reserved for the line-number gutter. The model keeps cursor
/// columns in buffer space; this constant only enters the horizontal
/// window math and the renderer.
pub const GUTTER_WIDTH: usize = 5;

/// Cursor position plus the two-axis viewport window. Both windows are
/// half-open: rows `[top, bottom)` and columns `[left, right)` are
/// visible. After every movement or edit the invariant
/// `top <= row < bottom && left <= col < right` is re-established.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub row: usize,
    pub col: usize,
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
    text_rows: usize,
    text_cols: usize,
}

/// Value-type capture of the six navigation fields, used for the
/// Help-mode enter/exit round trip.
#[derive(Debug, Clone, Copy)]
pub struct NavSnapshot {
    row: usize,
    col: usize,
    top: usize,
    bottom: usize,
    left: usize,
    right: usize,
}

impl NavSnapshot {
    pub fn capture(nav: &NavigationState) -> Self {
        Self {
            row: nav.row,
            col: nav.col,
            top: nav.top,
            bottom: nav.bottom,
            left: nav.left,
            right: nav.right,
        }
    }

    pub fn apply(&self, nav: &mut NavigationState) {
        nav.row = self.row;
        nav.col = self.col;
        nav.top = self.top;
        nav.bottom = self.bottom;
        nav.left = self.left;
        nav.right = self.right;
    }
}

impl NavigationState {
    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        // One terminal row is reserved for the status bar.
        let text_rows = (term_rows as usize).saturating_sub(1).max(1);
        let text_cols = (term_cols as usize).saturating_sub(GUTTER_WIDTH).max(1);
        Self {
            row: 0,
            col: 0,
            top: 0,
            bottom: text_rows,
            left: 0,
            right: text_cols,
            text_rows,
            text_cols,
        }
    }

    pub fn text_rows(&self) -> usize {
        self.text_rows
    }

    pub fn text_cols(&self) -> usize {
        self.text_cols
    }

    /// Re-derive the window extents after a terminal resize and pull the
    /// cursor back into view.
    pub fn resize(&mut self, term_cols: u16, term_rows: u16) {
        self.text_rows = (term_rows as usize).saturating_sub(1).max(1);
        self.text_cols = (term_cols as usize).saturating_sub(GUTTER_WIDTH).max(1);
        self.bottom = self.top + self.text_rows;
        self.right = self.left + self.text_cols;
        self.scroll_to_contain_cursor();
    }

    pub fn move_right(&mut self, buf: &TextBuffer, n: usize) {
        let new_col = self.col + n;
        if new_col > buf.line_len(self.row) {
            // Wrap to the start of the next row; no-op at the last row's end.
            if self.row + 1 >= buf.line_count() {
                return;
            }
            self.row += 1;
            self.col = 0;
        } else {
            self.col = new_col;
        }
        self.scroll_to_contain_cursor();
    }

    pub fn move_left(&mut self, buf: &TextBuffer, n: usize) {
        if let Some(new_col) = self.col.checked_sub(n) {
            self.col = new_col;
        } else if self.row > 0 {
            // Wrap to the end of the previous row; no-op at (0, 0).
            self.row -= 1;
            self.col = buf.line_len(self.row);
        } else {
            return;
        }
        self.scroll_to_contain_cursor();
    }

    /// Vertical movement clamps at the last row and leaves the column
    /// untouched, even when the target line is shorter.
    pub fn move_down(&mut self, buf: &TextBuffer, n: usize) {
        self.row = (self.row + n).min(buf.line_count().saturating_sub(1));
        self.scroll_to_contain_cursor();
    }

    pub fn move_up(&mut self, n: usize) {
        self.row = self.row.saturating_sub(n);
        self.scroll_to_contain_cursor();
    }

    /// Shift the windows the minimal distance that puts the cursor back
    /// inside them.
    pub fn scroll_to_contain_cursor(&mut self) {
        if self.row < self.top {
            self.scroll_up(self.top - self.row);
        } else if self.row >= self.bottom {
            self.scroll_down(self.row - self.bottom + 1);
        }
        if self.col < self.left {
            self.scroll_left(self.left - self.col);
        } else if self.col >= self.right {
            self.scroll_right(self.col - self.right + 1);
        }
    }

    fn scroll_up(&mut self, n: usize) {
        let n = n.min(self.top);
        self.top -= n;
        self.bottom -= n;
    }

    fn scroll_down(&mut self, n: usize) {
        self.top += n;
        self.bottom += n;
    }

    fn scroll_right(&mut self, n: usize) {
        self.left += n;
        self.right += n;
    }

    fn scroll_left(&mut self, n: usize) {
        if n <= self.left {
            self.left -= n;
            self.right -= n;
        } else {
            // Underflow resets the window to its left-aligned default.
            self.left = 0;
            self.right = self.text_cols;
        }
    }

    /// Column of the first non-space character, or 0 when the line is
    /// blank or empty.
    pub fn first_non_blank(line: &str) -> usize {
        line.chars().position(|c| c != ' ').unwrap_or(0)
    }

    pub fn jump_to_top(&mut self) {
        self.row = 0;
        self.col = 0;
        self.top = 0;
        self.bottom = self.text_rows;
        self.left = 0;
        self.right = self.text_cols;
    }

    pub fn jump_to_bottom(&mut self, buf: &TextBuffer) {
        self.row = buf.line_count().saturating_sub(1);
        self.col = 0;
        self.top = buf.line_count().saturating_sub(self.text_rows);
        self.bottom = self.top + self.text_rows;
        self.left = 0;
        self.right = self.text_cols;
    }

    /// Scroll the vertical window one line down without moving the
    /// cursor beyond what the invariant requires (Help-mode scrolling).
    pub fn scroll_line_down(&mut self, buf: &TextBuffer) {
        if self.bottom < buf.line_count() {
            self.scroll_down(1);
            if self.row < self.top {
                self.row = self.top;
            }
        }
    }

    pub fn scroll_line_up(&mut self) {
        if self.top > 0 {
            self.scroll_up(1);
            if self.row >= self.bottom {
                self.row = self.bottom - 1;
            }
        }
    }

    #[cfg(test)]
    pub fn cursor_in_view(&self) -> bool {
        self.top <= self.row
            && self.row < self.bottom
            && self.left <= self.col
            && self.col < self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavigationState {
        // 80x24 terminal: 23 text rows, 75 text columns.
        NavigationState::new(80, 24)
    }

    #[test]
    fn new_state_homes_cursor_and_windows() {
        let nav = nav();
        assert_eq!((nav.row, nav.col), (0, 0));
        assert_eq!((nav.top, nav.bottom), (0, 23));
        assert_eq!((nav.left, nav.right), (0, 75));
        assert!(nav.cursor_in_view());
    }

    #[test]
    fn right_wraps_to_next_line() {
        let buf = TextBuffer::from_text("ab\ncd");
        let mut nav = nav();
        nav.move_right(&buf, 1);
        nav.move_right(&buf, 1);
        assert_eq!((nav.row, nav.col), (0, 2));
        nav.move_right(&buf, 1);
        assert_eq!((nav.row, nav.col), (1, 0));
    }

    #[test]
    fn right_is_noop_at_document_end() {
        let buf = TextBuffer::from_text("ab");
        let mut nav = nav();
        nav.move_right(&buf, 5);
        assert_eq!((nav.row, nav.col), (0, 0));
        nav.col = 2;
        nav.move_right(&buf, 1);
        assert_eq!((nav.row, nav.col), (0, 2));
    }

    #[test]
    fn left_wraps_to_previous_line_end() {
        let buf = TextBuffer::from_text("abc\nd");
        let mut nav = nav();
        nav.row = 1;
        nav.col = 0;
        nav.move_left(&buf, 1);
        assert_eq!((nav.row, nav.col), (0, 3));
    }

    #[test]
    fn left_is_noop_at_origin() {
        let buf = TextBuffer::from_text("abc");
        let mut nav = nav();
        nav.move_left(&buf, 1);
        assert_eq!((nav.row, nav.col), (0, 0));
    }

    #[test]
    fn vertical_movement_clamps_and_keeps_column() {
        let buf = TextBuffer::from_text("abcdef\nx\nlonger");
        let mut nav = nav();
        nav.col = 4;
        nav.move_down(&buf, 1);
        assert_eq!((nav.row, nav.col), (1, 4));
        nav.move_down(&buf, 10);
        assert_eq!((nav.row, nav.col), (2, 4));
        nav.move_up(10);
        assert_eq!((nav.row, nav.col), (0, 4));
    }

    #[test]
    fn scrolling_follows_cursor_down_and_up() {
        let text = vec!["x"; 100].join("\n");
        let buf = TextBuffer::from_text(&text);
        let mut nav = nav();
        nav.move_down(&buf, 50);
        assert!(nav.cursor_in_view());
        assert_eq!(nav.bottom, 51);
        assert_eq!(nav.top, 28);
        nav.move_up(40);
        assert!(nav.cursor_in_view());
        assert_eq!(nav.top, 10);
    }

    #[test]
    fn horizontal_scroll_follows_cursor() {
        let buf = TextBuffer::from_text(&"y".repeat(200));
        let mut nav = nav();
        nav.move_right(&buf, 100);
        assert!(nav.cursor_in_view());
        assert_eq!(nav.right, 101);
        nav.move_left(&buf, 90);
        assert!(nav.cursor_in_view());
    }

    #[test]
    fn left_shift_lands_on_the_left_aligned_default() {
        let mut nav = nav();
        nav.left = 10;
        nav.right = 85;
        nav.col = 0;
        nav.scroll_to_contain_cursor();
        assert_eq!((nav.left, nav.right), (0, 75));
        assert!(nav.cursor_in_view());
    }

    #[test]
    fn first_non_blank_column() {
        assert_eq!(NavigationState::first_non_blank("  abc"), 2);
        assert_eq!(NavigationState::first_non_blank("abc"), 0);
        assert_eq!(NavigationState::first_non_blank("    "), 0);
        assert_eq!(NavigationState::first_non_blank(""), 0);
    }

    #[test]
    fn jump_to_bottom_shows_last_line() {
        let text = vec!["x"; 100].join("\n");
        let buf = TextBuffer::from_text(&text);
        let mut nav = nav();
        nav.jump_to_bottom(&buf);
        assert_eq!(nav.row, 99);
        assert_eq!(nav.col, 0);
        assert_eq!((nav.top, nav.bottom), (77, 100));
        assert!(nav.cursor_in_view());

        nav.jump_to_top();
        assert_eq!((nav.row, nav.col), (0, 0));
        assert_eq!((nav.top, nav.bottom), (0, 23));
    }

    #[test]
    fn jump_to_bottom_short_document() {
        let buf = TextBuffer::from_text("a\nb");
        let mut nav = nav();
        nav.jump_to_bottom(&buf);
        assert_eq!(nav.row, 1);
        assert_eq!((nav.top, nav.bottom), (0, 23));
    }

    #[test]
    fn snapshot_round_trip() {
        let buf = TextBuffer::from_text(&vec!["x"; 100].join("\n"));
        let mut nav = nav();
        nav.move_down(&buf, 60);
        let snap = NavSnapshot::capture(&nav);
        nav.jump_to_top();
        snap.apply(&mut nav);
        assert_eq!(nav.row, 60);
        assert_eq!((nav.top, nav.bottom), (38, 61));
        assert!(nav.cursor_in_view());
    }

    #[test]
    fn line_scroll_keeps_invariant() {
        let buf = TextBuffer::from_text(&vec!["x"; 50].join("\n"));
        let mut nav = nav();
        for _ in 0..30 {
            nav.scroll_line_down(&buf);
            assert!(nav.cursor_in_view());
        }
        assert_eq!(nav.bottom, 50);
        for _ in 0..40 {
            nav.scroll_line_up();
            assert!(nav.cursor_in_view());
        }
        assert_eq!(nav.top, 0);
    }

    #[test]
    fn resize_pulls_cursor_back_into_view() {
        let buf = TextBuffer::from_text(&vec!["x"; 100].join("\n"));
        let mut nav = nav();
        nav.move_down(&buf, 50);
        nav.resize(40, 10);
        assert!(nav.cursor_in_view());
        assert_eq!(nav.text_rows(), 9);
        assert_eq!(nav.text_cols(), 35);
    }
}
