// src/models/derived_fields.rs
use chrono::{DateTime, Utc};

/// Boostnote note kinds. Snippet notes need a file name and language mode that
/// Simplenote exports lack, so only markdown notes are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteType {
    #[default]
    Markdown,
}

impl NoteType {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "MARKDOWN_NOTE",
        }
    }
}

/// Everything a rendered record needs, derived from one input note.
///
/// `content` holds the note's raw bytes, already escaped for the `'''` block
/// but not yet indented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields {
    pub title: String,
    pub trashed: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub note_type: NoteType,
    pub folder: String,
    pub content: Vec<u8>,
}
