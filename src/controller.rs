use crate::clipboard::SystemClipboard;
use crate::config::RcConfig;
use crate::error::EditorError;
use crate::file_commands;
use crate::help;
use crate::key_handler::KeyHandler;
use crate::navigation::{NavSnapshot, NavigationState};
use crate::selection::Selection;
use crate::text_buffer::TextBuffer;
use crate::view::{RenderParams, View};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, stdout};
use std::path::PathBuf;

/// Every operation a keystroke can trigger. Each entry is a complete,
/// atomic operation; the key tables in `KeyHandler` map input events to
/// these per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,

    // Mode transitions
    EnterInsert,
    EnterInsertAfter,
    EnterInsertLineEnd,
    ExitInsert,
    ToggleHelp,
    ExitHelp,

    // Movement
    MoveLeft,
    MoveDown,
    MoveUp,
    MoveRight,
    MoveLineEnd,
    MoveFirstNonBlank,
    ScrollToTop,
    ScrollToBottom,

    // Selection
    SelectRight,
    SelectLeft,
    SelectLine,
    Deselect,

    // Copy and paste
    Yank,
    Paste,
    YankToClipboard,
    PasteFromClipboard,

    // Files
    Write,
    WriteAs,

    // Insert mode editing
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteChar,

    // Help mode scrolling
    HelpScrollDown,
    HelpScrollUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Help,
}

/// The single editor context: document, scratch clipboard, selection,
/// navigation and mode, owned by the run loop and mutated one command
/// at a time.
pub struct Controller {
    pub text: TextBuffer,
    pub help: TextBuffer,
    pub scratch: TextBuffer,
    pub sel: Selection,
    pub nav: NavigationState,
    pub mode: Mode,
    pub filename: Option<PathBuf>,
    pub status_message: String,
    pub view: View,
    pub clipboard: SystemClipboard,
    pub tab_stop: usize,
    pub(crate) saved_nav: NavSnapshot,
}

impl Controller {
    pub fn new(config: &RcConfig) -> Self {
        Self::from_text(String::new(), None, config)
    }

    pub fn open(path: PathBuf, config: &RcConfig) -> Result<Self, EditorError> {
        let text = file_commands::read_to_text(&path)?;
        Ok(Self::from_text(text, Some(path), config))
    }

    fn from_text(text: String, filename: Option<PathBuf>, config: &RcConfig) -> Self {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        Self::build(text, filename, config, cols, rows, SystemClipboard::detect())
    }

    fn build(
        text: String,
        filename: Option<PathBuf>,
        config: &RcConfig,
        cols: u16,
        rows: u16,
        clipboard: SystemClipboard,
    ) -> Self {
        let text = TextBuffer::from_text(&text);
        let mut nav = NavigationState::new(cols, rows);
        // The cursor opens on the first non-blank character of the first line.
        nav.col = NavigationState::first_non_blank(text.line(0).unwrap_or_default());
        nav.scroll_to_contain_cursor();
        let saved_nav = NavSnapshot::capture(&nav);
        let mut view = View::new();
        view.set_tab_stop(config.tab_stop);

        Self {
            text,
            help: help::create_help_buffer(),
            scratch: TextBuffer::new(),
            sel: Selection::new(),
            nav,
            mode: Mode::Normal,
            filename,
            status_message: String::new(),
            view,
            clipboard,
            tab_stop: config.tab_stop,
            saved_nav,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_text(text: &str) -> Self {
        Self::build(
            text.to_string(),
            None,
            &RcConfig::default(),
            80,
            24,
            SystemClipboard::unavailable(),
        )
    }

    pub fn run(&mut self) -> io::Result<()> {
        execute!(stdout(), EnterAlternateScreen)?;
        enable_raw_mode()?;

        // Restore the terminal even when the loop unwinds.
        struct TerminalGuard;
        impl Drop for TerminalGuard {
            fn drop(&mut self) {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
            }
        }
        let _guard = TerminalGuard;

        self.run_loop()
    }

    fn run_loop(&mut self) -> io::Result<()> {
        loop {
            self.render()?;

            match event::read()? {
                Event::Key(key_event) => {
                    let has_selection = !self.sel.is_empty();
                    if let Some(command) =
                        KeyHandler::parse_key(self.mode, &key_event, has_selection)
                    {
                        if self.execute_command(command) {
                            break;
                        }
                    }
                }
                Event::Resize(cols, rows) => {
                    self.nav.resize(cols, rows);
                    self.view.force_redraw();
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let buffer = match self.mode {
            Mode::Help => &self.help,
            _ => &self.text,
        };
        let params = RenderParams {
            buffer,
            nav: &self.nav,
            sel: &self.sel,
            mode: self.mode,
            filename: self.filename.as_deref(),
            status_message: &self.status_message,
        };
        self.view.render(&params)
    }

    /// Execute one command to completion. Returns true when the run
    /// loop should terminate.
    pub fn execute_command(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return true,

            Command::MoveLeft
            | Command::MoveDown
            | Command::MoveUp
            | Command::MoveRight
            | Command::MoveLineEnd
            | Command::MoveFirstNonBlank
            | Command::ScrollToTop
            | Command::ScrollToBottom => self.execute_movement_command(command),

            Command::EnterInsert
            | Command::EnterInsertAfter
            | Command::EnterInsertLineEnd
            | Command::ExitInsert => self.execute_mode_command(command),

            Command::SelectRight
            | Command::SelectLeft
            | Command::SelectLine
            | Command::Deselect => self.execute_selection_command(command),

            Command::Yank
            | Command::Paste
            | Command::YankToClipboard
            | Command::PasteFromClipboard => self.execute_yank_paste_command(command),

            Command::InsertChar(_)
            | Command::InsertNewline
            | Command::InsertTab
            | Command::DeleteChar => self.execute_insert_command(command),

            Command::Write => self.write_file(),
            Command::WriteAs => self.write_file_as(),

            Command::ToggleHelp => self.enter_help(),
            Command::ExitHelp => self.exit_help(),
            Command::HelpScrollDown => self.help_scroll_down(),
            Command::HelpScrollUp => self.help_scroll_up(),
        }

        false
    }
}
