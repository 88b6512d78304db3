use crate::controller::{Command, Mode};
use crossterm::event::{KeyCode, KeyEvent};

pub struct KeyHandler;

impl KeyHandler {
    pub fn parse_key(mode: Mode, key_event: &KeyEvent, has_selection: bool) -> Option<Command> {
        match mode {
            Mode::Normal => Self::parse_normal_mode_key(key_event.code, has_selection),
            Mode::Insert => Self::parse_insert_mode_key(key_event.code),
            Mode::Help => Self::parse_help_mode_key(key_event.code),
        }
    }

    fn parse_normal_mode_key(key: KeyCode, has_selection: bool) -> Option<Command> {
        match key {
            KeyCode::Char('q') => Some(Command::Quit),

            // Insert modes
            KeyCode::Char('i') => Some(Command::EnterInsert),
            KeyCode::Char('a') => Some(Command::EnterInsertAfter),
            KeyCode::Char('A') => Some(Command::EnterInsertLineEnd),

            // H grows the selection leftward while one is active and
            // toggles help otherwise.
            KeyCode::Char('H') if has_selection => Some(Command::SelectLeft),
            KeyCode::Char('H') => Some(Command::ToggleHelp),

            // Basic movement
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => Some(Command::MoveLeft),
            KeyCode::Char('j') | KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Char('l') | KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Char('$') => Some(Command::MoveLineEnd),
            KeyCode::Char('0') => Some(Command::MoveFirstNonBlank),

            // Selection
            KeyCode::Char('L') => Some(Command::SelectRight),
            KeyCode::Char('V') => Some(Command::SelectLine),
            KeyCode::Char('D') | KeyCode::Esc => Some(Command::Deselect),

            // Copy and paste
            KeyCode::Char('y') => Some(Command::Yank),
            KeyCode::Char('p') => Some(Command::Paste),
            KeyCode::Char('Y') => Some(Command::YankToClipboard),
            KeyCode::Char('P') => Some(Command::PasteFromClipboard),

            // Files
            KeyCode::Char('w') => Some(Command::Write),
            KeyCode::Char('W') => Some(Command::WriteAs),

            // Scrolling
            KeyCode::Char('g') => Some(Command::ScrollToTop),
            KeyCode::Char('G') => Some(Command::ScrollToBottom),

            _ => None,
        }
    }

    fn parse_insert_mode_key(key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Esc => Some(Command::ExitInsert),
            KeyCode::Backspace | KeyCode::Delete => Some(Command::DeleteChar),
            KeyCode::Tab => Some(Command::InsertTab),
            KeyCode::Enter => Some(Command::InsertNewline),
            KeyCode::Char(c) => Some(Command::InsertChar(c)),
            _ => None,
        }
    }

    fn parse_help_mode_key(key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Esc | KeyCode::Char('H') => Some(Command::ExitHelp),
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Command::HelpScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Command::HelpScrollUp),
            _ => None,
        }
    }
}
