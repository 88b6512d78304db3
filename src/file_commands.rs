use crate::controller::Controller;
use crate::error::EditorError;
use crate::prompt;
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-file read. A path that does not exist yields an empty document
/// rather than an error, so `scrawl newfile.txt` starts a fresh buffer.
pub fn read_to_text(path: &Path) -> Result<String, EditorError> {
    if !path.is_file() {
        return Ok(String::new());
    }
    Ok(fs::read_to_string(path)?)
}

impl Controller {
    /// `w`: write to the current filename, prompting only when none is
    /// set yet.
    pub(crate) fn write_file(&mut self) {
        let target = match &self.filename {
            Some(path) => Some(path.clone()),
            None => self.prompt_for_filename(),
        };
        match target {
            Some(path) => self.save_to(path),
            None => self.status_message = "Write aborted".to_string(),
        }
    }

    /// `W`: always prompt for a filename.
    pub(crate) fn write_file_as(&mut self) {
        match self.prompt_for_filename() {
            Some(path) => self.save_to(path),
            None => self.status_message = "Write aborted".to_string(),
        }
    }

    fn prompt_for_filename(&mut self) -> Option<PathBuf> {
        let result = prompt::read_filename(self.filename.as_deref());
        // The prompt painted over the editor rows.
        self.view.force_redraw();
        match result {
            Ok(Some(name)) => Some(PathBuf::from(name)),
            Ok(None) => None,
            Err(err) => {
                self.status_message = format!("Error: prompt failed: {err}");
                None
            }
        }
    }

    /// A failed write reports on the status line and leaves the
    /// in-memory document and filename untouched.
    fn save_to(&mut self, path: PathBuf) {
        let content = self.text.plain_text();
        match fs::write(&path, &content) {
            Ok(()) => {
                tracing::info!("wrote {} ({} bytes)", path.display(), content.len());
                self.status_message =
                    format!("\"{}\" {}B written", path.display(), content.len());
                self.filename = Some(path);
            }
            Err(err) => {
                tracing::warn!("write to {} failed: {err}", path.display());
                self.status_message = format!("Error: could not write \"{}\"", path.display());
            }
        }
    }
}
