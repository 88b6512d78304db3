use crate::error::EditorError;
use crate::selection::Selection;

/// Line-oriented text storage. Lines carry no terminators; an empty
/// document is a single empty line. All mutation funnels through
/// `replace_range`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

/// Byte offset of character column `col` in `line`, or the line's byte
/// length when `col` equals the character count. Columns are character
/// units throughout the model.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn line(&self, i: usize) -> Result<&str, EditorError> {
        self.lines
            .get(i)
            .map(String::as_str)
            .ok_or(EditorError::OutOfRange(i))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Character length of line `i`, or 0 when `i` is out of range.
    /// Movement clamps at edges rather than erroring.
    pub fn line_len(&self, i: usize) -> usize {
        self.lines.get(i).map_or(0, |l| l.chars().count())
    }

    pub fn plain_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Text covered by a selection. Single-row selections slice one line;
    /// multi-row selections take the start-line remainder, every full
    /// intermediate line and the end-line prefix, joined by newlines.
    /// An empty selection yields an empty string.
    pub fn text_in_range(&self, sel: &Selection) -> String {
        let (Some((sr, sc)), Some((er, ec))) = (sel.start(), sel.end()) else {
            return String::new();
        };

        if sr == er {
            let line = &self.lines[sr];
            line[byte_index(line, sc)..byte_index(line, ec)].to_string()
        } else if sr < er {
            let start = &self.lines[sr];
            let end = &self.lines[er];
            let mut parts = vec![start[byte_index(start, sc)..].to_string()];
            for line in &self.lines[sr + 1..er] {
                parts.push(line.clone());
            }
            parts.push(end[..byte_index(end, ec)].to_string());
            parts.join("\n")
        } else {
            String::new()
        }
    }

    fn is_valid(&self, r: usize, c: usize) -> bool {
        r < self.lines.len() && c <= self.line_len(r)
    }

    /// The single mutation primitive: splice `text` over the range
    /// `(r1,c1)..(r2,c2)`. Character insertion, deletion, paste and line
    /// split/merge are all expressed through this. An invalid or
    /// misordered range is rejected and the buffer is left untouched.
    pub fn replace_range(
        &mut self,
        r1: usize,
        c1: usize,
        r2: usize,
        c2: usize,
        text: &str,
    ) -> Result<(), EditorError> {
        if !self.is_valid(r1, c1) || !self.is_valid(r2, c2) || (r1, c1) > (r2, c2) {
            return Err(EditorError::InvalidRange(r1, c1, r2, c2));
        }

        let prefix = &self.lines[r1][..byte_index(&self.lines[r1], c1)];
        let suffix = &self.lines[r2][byte_index(&self.lines[r2], c2)..];
        let spliced = format!("{prefix}{text}{suffix}");
        let replacement: Vec<String> = spliced.split('\n').map(str::to_string).collect();
        self.lines.splice(r1..=r2, replacement);
        Ok(())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
