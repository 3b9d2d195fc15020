//! System clipboard access
//!
//! On Linux, clipboard contents don't persist after the Clipboard object is dropped.
//! Writes therefore happen on a short-lived background thread that holds the
//! clipboard open for a moment.

use std::thread;
use std::time::Duration;
use token_launcher_core::ClipboardWriter;

/// Clipboard backed by the platform clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) {
        copy_to_clipboard(text.to_string());
    }
}

/// Copy text to clipboard without blocking the caller
///
/// Failures are logged and otherwise ignored.
pub fn copy_to_clipboard(text: String) {
    thread::spawn(move || match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(&text) {
                tracing::warn!("Failed to copy to clipboard: {}", e);
                return;
            }
            tracing::debug!("Copied {} bytes to clipboard", text.len());
            // Give clipboard managers time to grab the contents
            #[cfg(target_os = "linux")]
            {
                thread::sleep(Duration::from_secs(2));
            }
        }
        Err(e) => {
            tracing::warn!("Failed to access clipboard: {}", e);
        }
    });
}
