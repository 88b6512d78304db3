use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute,
    terminal::{size, Clear, ClearType},
};
use std::io::{self, stdout, Write};
use std::path::Path;

const PROMPT: &str = "Save as:> ";

/// Blocking single-line input over the bottom terminal row. Enter
/// confirms, Esc cancels. Empty input falls back to the previous
/// filename when one exists.
pub fn read_filename(previous: Option<&Path>) -> io::Result<Option<String>> {
    let mut input = String::new();
    loop {
        draw(&input)?;
        if let Event::Key(key_event) = event::read()? {
            match key_event.code {
                KeyCode::Enter => break,
                KeyCode::Esc => return Ok(None),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            }
        }
    }

    if input.is_empty() {
        return Ok(previous.map(|p| p.to_string_lossy().into_owned()));
    }
    Ok(Some(input))
}

fn draw(input: &str) -> io::Result<()> {
    let (_, height) = size()?;
    execute!(
        stdout(),
        cursor::MoveTo(0, height.saturating_sub(1)),
        Clear(ClearType::CurrentLine)
    )?;
    print!("{PROMPT}{input}");
    stdout().flush()
}
