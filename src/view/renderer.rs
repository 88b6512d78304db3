use crate::controller::Mode;
use crate::navigation::{NavigationState, GUTTER_WIDTH};
use crate::selection::Selection;
use crate::text_buffer::TextBuffer;
use crossterm::{
    cursor, execute,
    style::{Attribute, Color, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{size, Clear, ClearType},
};
use std::io::{self, stdout, Write};
use std::path::Path;
use unicode_width::UnicodeWidthChar;

pub struct RenderParams<'a> {
    pub buffer: &'a TextBuffer,
    pub nav: &'a NavigationState,
    pub sel: &'a Selection,
    pub mode: Mode,
    pub filename: Option<&'a Path>,
    pub status_message: &'a str,
}

pub struct View {
    last_lines: Vec<String>,
    last_status: String,
    needs_full_redraw: bool,
    tab_stop: usize,
}

impl View {
    pub fn new() -> Self {
        Self {
            last_lines: Vec::new(),
            last_status: String::new(),
            needs_full_redraw: true,
            tab_stop: 4,
        }
    }

    pub fn force_redraw(&mut self) {
        self.needs_full_redraw = true;
    }

    pub fn set_tab_stop(&mut self, tab_stop: usize) {
        self.tab_stop = tab_stop;
    }

    fn move_cursor(&self, line: usize, column: usize) -> io::Result<()> {
        execute!(stdout(), cursor::MoveTo(column as u16, line as u16))
    }

    pub fn render(&mut self, params: &RenderParams<'_>) -> io::Result<()> {
        let (width, height) = size()?;

        if self.needs_full_redraw {
            execute!(stdout(), Clear(ClearType::All))?;
            self.needs_full_redraw = false;
            self.last_lines.clear();
            self.last_status.clear();
        }

        let nav = params.nav;
        let visible_lines: Vec<String> = (nav.top..nav.bottom)
            .map(|row| Self::compose_line(params, row))
            .collect();

        // Only redraw lines that changed since the last frame.
        for (i, line) in visible_lines.iter().enumerate() {
            if i >= self.last_lines.len() || self.last_lines[i] != *line {
                self.move_cursor(i, 0)?;
                execute!(stdout(), Clear(ClearType::CurrentLine))?;
                print!("{line}");
            }
        }
        self.last_lines = visible_lines;

        let status = Self::compose_status(params, width as usize);
        if self.last_status != status {
            self.move_cursor(height.saturating_sub(1) as usize, 0)?;
            execute!(stdout(), Clear(ClearType::CurrentLine))?;
            print!("{status}");
            self.last_status = status;
        }

        // Park the hardware cursor on the edit position.
        let line = params.buffer.line(nav.row).unwrap_or_default();
        let screen_row = nav.row.saturating_sub(nav.top);
        let screen_col = GUTTER_WIDTH + self.window_display_column(line, nav.left, nav.col);
        self.move_cursor(screen_row, screen_col)?;
        stdout().flush()
    }

    /// One screen row: right-aligned line number in the gutter, then the
    /// visible column window of the line, selection in reverse video.
    /// Rows past the end of the buffer stay blank.
    fn compose_line(params: &RenderParams<'_>, row: usize) -> String {
        let Ok(line) = params.buffer.line(row) else {
            return String::new();
        };
        let nav = params.nav;
        let gutter = format!("{:>width$} ", row + 1, width = GUTTER_WIDTH - 1);

        let chars: Vec<char> = line.chars().collect();
        let end = chars.len().min(nav.right);
        let mut text = String::new();
        for (col, ch) in chars
            .iter()
            .enumerate()
            .take(end)
            .skip(nav.left.min(chars.len()))
        {
            if params.sel.contains(row, col) {
                text.push_str(&format!(
                    "{}{ch}{}",
                    SetAttribute(Attribute::Reverse),
                    SetAttribute(Attribute::Reset)
                ));
            } else {
                text.push(*ch);
            }
        }

        // Mark lines that run past the right edge of the window.
        if chars.len() > nav.right {
            text.push_str("...");
        }

        format!("{gutter}{text}")
    }

    fn compose_status(params: &RenderParams<'_>, width: usize) -> String {
        let (label, background) = match params.mode {
            Mode::Normal => (" NORMAL", Color::Green),
            Mode::Insert => (" INSERT", Color::Blue),
            Mode::Help => (" HELP", Color::Magenta),
        };
        let left = if params.status_message.is_empty() {
            label.to_string()
        } else {
            format!(" {}", params.status_message)
        };

        let filename = params
            .filename
            .map_or_else(|| "[No Name]".to_string(), |p| p.display().to_string());
        let right = format!(
            "{} || {}:{} ",
            filename,
            params.nav.row + 1,
            params.nav.col + 1
        );

        let pad = width.saturating_sub(left.chars().count() + right.chars().count());
        let mut bar: String = format!("{left}{}{right}", " ".repeat(pad))
            .chars()
            .take(width)
            .collect();
        bar = format!(
            "{}{}{bar}{}",
            SetBackgroundColor(background),
            SetForegroundColor(Color::White),
            ResetColor
        );
        bar
    }

    /// Display width of the window slice left of the cursor, so the
    /// hardware cursor lines up with what `compose_line` printed.
    /// Accounts for tab stops and wide characters.
    fn window_display_column(&self, line: &str, left: usize, col: usize) -> usize {
        let chars: Vec<char> = line.chars().collect();
        let mut display_col = 0;
        for i in left..col.min(chars.len()) {
            match chars[i] {
                '\t' => display_col = ((display_col / self.tab_stop) + 1) * self.tab_stop,
                c => display_col += c.width().unwrap_or(1),
            }
        }
        // The cursor may sit past the line end (end-of-line insertion
        // point); each missing cell counts one column.
        display_col + col.saturating_sub(chars.len().max(left))
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
