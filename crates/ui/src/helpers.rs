//! Helper functions for the UI

use std::path::Path;

use arboard::Clipboard;

/// Copy text to clipboard
pub fn copy_to_clipboard(text: &str) -> bool {
    if let Ok(mut clipboard) = Clipboard::new() {
        clipboard.set_text(text).is_ok()
    } else {
        false
    }
}

/// Compact rendering of a spoofed copy's path for the status line.
/// Long temp paths get elided down to `…/<file name>`.
pub fn display_path(path: &Path) -> String {
    let full = path.display().to_string();
    if full.chars().count() <= 42 {
        return full;
    }
    match path.file_name() {
        Some(name) => format!("…{}{}", std::path::MAIN_SEPARATOR, name.to_string_lossy()),
        None => full,
    }
}
