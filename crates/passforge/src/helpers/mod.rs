use crate::Result;
use arboard::Clipboard;
use parking_lot::Mutex;
use std::sync::LazyLock;

pub(crate) mod output;
pub(crate) mod readline;

pub use passforge_cli_helpers::messages;

use messages::{success, warn};

/// Global clipboard singleton.
pub(crate) static CLIPBOARD: LazyLock<Mutex<Option<Clipboard>>> =
    LazyLock::new(|| Mutex::new(Clipboard::new().ok()));

pub(crate) fn set_clipboard_text(text: &str) -> Result<bool> {
    let mut clipboard = CLIPBOARD.lock();
    if let Some(clipboard) = clipboard.as_mut() {
        clipboard.set_text(text)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Copy text to the clipboard, failures are reported
/// as warnings.
pub(crate) fn copy_to_clipboard(text: &str) {
    match set_clipboard_text(text) {
        Ok(true) => success("copied last password to clipboard"),
        Ok(false) => warn("clipboard is not available"),
        Err(e) => warn(format!("failed to copy to clipboard: {}", e)),
    }
}
