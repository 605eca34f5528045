//! System clipboard backend via the arboard crate

use arboard::Clipboard;

use super::{ClipboardError, ClipboardResult};

/// Copy text to the OS clipboard
///
/// Fails with `SystemUnavailable` in environments without a display server.
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}
