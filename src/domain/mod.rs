//! Core types: Note, NoteId, Tag, Category, Theme

mod category;
mod note;
mod note_id;
mod tag;
mod theme;

pub use category::{Category, CategoryFilter, ParseCategoryError};
pub use note::{
    DEFAULT_COLOR, Note, NoteBuilder, NotePatch, ParseNoteError, ParseNoteErrorKind, is_blank,
    next_modified,
};
pub use note_id::{NoteId, ParseNoteIdError};
pub use tag::{ParseTagError, Tag};
pub use theme::{ParseThemeError, Theme};
