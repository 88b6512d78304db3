use arboard::Clipboard;

/// Bridge to the operating system clipboard. Availability is probed once
/// at startup; when the platform offers no clipboard the yank/paste
/// commands that target it degrade to no-ops instead of failing.
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn detect() -> Self {
        let inner = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::warn!("system clipboard unavailable: {err}");
                None
            }
        };
        Self { inner }
    }

    #[cfg(test)]
    pub fn unavailable() -> Self {
        Self { inner: None }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    pub fn copy(&mut self, text: &str) {
        if let Some(clipboard) = &mut self.inner {
            if let Err(err) = clipboard.set_text(text.to_string()) {
                tracing::warn!("clipboard copy failed: {err}");
            }
        }
    }

    pub fn paste(&mut self) -> Option<String> {
        let clipboard = self.inner.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!("clipboard paste failed: {err}");
                None
            }
        }
    }
}
