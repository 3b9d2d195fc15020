//! Logo file selection
//!
//! The terminal has no native file dialog, so the logo field takes a typed
//! path. Resolving it either yields a file reference or nothing; nothing
//! leaves the current logo alone.

use std::path::PathBuf;
use token_launcher_core::FileRef;

/// Extensions offered by the logo picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "ico"];

/// Resolve a typed path to an image file
///
/// Surrounding whitespace and quotes (as left by drag-and-drop into a
/// terminal) are stripped and a leading `~/` is expanded. Only existing
/// files with an image extension are accepted; the content is not read.
pub fn pick_image(input: &str) -> Option<FileRef> {
    let path = expand_path(input)?;

    if !path.is_file() {
        tracing::debug!("Logo picker: {} is not a file", path.display());
        return None;
    }
    if !has_image_extension(&path) {
        tracing::debug!("Logo picker: {} is not an image", path.display());
        return None;
    }

    Some(FileRef::from_path(path))
}

fn expand_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim().trim_matches(|c: char| c == '\'' || c == '"');
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.strip_prefix("~/") {
        Some(rest) => dirs_next::home_dir().map(|home| home.join(rest)),
        None => Some(PathBuf::from(trimmed)),
    }
}

fn has_image_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
