// src/core/title.rs

/// Simplenote prefixes the file names of trashed notes with this marker.
pub const TRASH_PREFIX: &str = "trash-";

/// Returns the first line of `content` that is non-empty after trimming.
///
/// An empty string means the note holds only blank lines and should not be
/// imported. Invalid UTF-8 is replaced rather than rejected.
#[inline]
#[must_use]
pub fn derive_title(content: &[u8]) -> String {
    String::from_utf8_lossy(content)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_owned)
        .unwrap_or_default()
}

#[inline]
#[must_use]
pub fn is_trashed(file_name: &str) -> bool {
    file_name.starts_with(TRASH_PREFIX)
}
