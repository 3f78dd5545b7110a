//! Note Store: owned note collection with persistence, import and export

mod error;
mod note_store;
mod preferences;
mod transfer;

pub use error::{StoreError, StoreResult};
pub use note_store::{Clock, NOTES_KEY, NoteDraft, NoteStore, SystemClock};
pub use preferences::{THEME_KEY, load_theme, save_theme, toggle_theme};
pub use transfer::{export_file_name, parse_import, serialize_export};
