use thiserror::Error;

/// Failures a command can surface. None of these terminate the editor;
/// they are reported on the status line and the loop keeps running.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("line {0} is out of range")]
    OutOfRange(usize),

    #[error("invalid range ({0},{1})..({2},{3})")]
    InvalidRange(usize, usize, usize, usize),

    #[error("file i/o failed: {0}")]
    FileIo(#[from] std::io::Error),
}
