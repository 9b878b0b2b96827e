// src/models.rs
mod derived_fields;
mod folder_registry;
mod import_summary;
mod input_note;

pub use derived_fields::{DerivedFields, NoteType};
pub use folder_registry::{Folder, FolderRegistry};
pub use import_summary::ImportSummary;
pub use input_note::InputNote;
