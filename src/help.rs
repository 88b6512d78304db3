use crate::controller::{Controller, Mode};
use crate::navigation::NavSnapshot;
use crate::text_buffer::TextBuffer;

pub fn create_help_buffer() -> TextBuffer {
    let help_lines = vec![
        "SCRAWL HELP".to_string(),
        "===========".to_string(),
        "".to_string(),
        "NORMAL MODE:".to_string(),
        "  q - Quit".to_string(),
        "  H - Toggle help (extends selection left while one is active)".to_string(),
        "  h, j, k, l - Cursor movement (arrow keys also work)".to_string(),
        "  $ - Move to end of line".to_string(),
        "  0 - Move to first non-blank character".to_string(),
        "  i - Insert mode".to_string(),
        "  a - Insert mode after the cursor".to_string(),
        "  A - Insert mode at end of line".to_string(),
        "".to_string(),
        "SELECTION:".to_string(),
        "  L - Extend selection right".to_string(),
        "  H - Extend selection left (when a selection exists)".to_string(),
        "  V - Select the current line".to_string(),
        "  D, Esc - Deselect".to_string(),
        "".to_string(),
        "COPY & PASTE:".to_string(),
        "  y - Yank selection".to_string(),
        "  p - Paste yanked text".to_string(),
        "  Y - Yank selection to system clipboard".to_string(),
        "  P - Paste from system clipboard".to_string(),
        "".to_string(),
        "FILES:".to_string(),
        "  w - Write to file".to_string(),
        "  W - Write as (always prompts)".to_string(),
        "".to_string(),
        "SCROLLING:".to_string(),
        "  g - Scroll to top".to_string(),
        "  G - Scroll to bottom".to_string(),
        "".to_string(),
        "HELP MODE:".to_string(),
        "  j, k - Scroll one line".to_string(),
        "  Esc, H - Back to normal mode".to_string(),
        "  q - Quit".to_string(),
    ];

    TextBuffer::from_text(&help_lines.join("\n"))
}

impl Controller {
    /// Entering help snapshots the navigation state, swaps the help
    /// document in and homes the viewport.
    pub fn enter_help(&mut self) {
        self.saved_nav = NavSnapshot::capture(&self.nav);
        self.sel.clear();
        self.mode = Mode::Help;
        self.nav.jump_to_top();
    }

    /// Leaving help restores the snapshot over the text buffer and pulls
    /// the cursor back into view.
    pub fn exit_help(&mut self) {
        self.mode = Mode::Normal;
        self.saved_nav.apply(&mut self.nav);
        self.nav.scroll_to_contain_cursor();
    }

    pub fn help_scroll_down(&mut self) {
        self.nav.scroll_line_down(&self.help);
    }

    pub fn help_scroll_up(&mut self) {
        self.nav.scroll_line_up();
    }
}
