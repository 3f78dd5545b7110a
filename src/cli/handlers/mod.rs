//! Command handlers for the CLI.

mod list;
mod metadata;
mod notes;
mod resolve;
mod theme;
mod transfer;

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::config::Config;
use crate::infra::SqliteStore;
use crate::store::NoteStore;

// Re-export public items
pub use list::handle_list;
pub use metadata::{handle_counts, handle_stats, handle_tag, handle_tags, handle_untag};
pub use notes::{handle_clear, handle_edit, handle_new, handle_pin, handle_rm, handle_show};
pub use resolve::{ResolveResult, resolve_note};
pub use theme::handle_theme;
pub use transfer::{handle_export, handle_import};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the key-value store in a data directory.
pub(crate) fn open_kv(data_dir: &Path) -> Result<SqliteStore> {
    let path = Config::store_path(data_dir);
    SqliteStore::open(&path).with_context(|| format!("failed to open store at {}", path.display()))
}

/// Opens the note store in a data directory.
pub(crate) fn open_store(data_dir: &Path) -> Result<NoteStore<SqliteStore>> {
    let kv = open_kv(data_dir)?;
    NoteStore::open(kv).with_context(|| {
        format!(
            "failed to load notes from {}",
            Config::store_path(data_dir).display()
        )
    })
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
