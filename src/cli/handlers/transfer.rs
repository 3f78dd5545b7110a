//! Export and import command handlers.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

use super::open_store;
use crate::cli::{ExportArgs, ImportArgs};
use crate::infra::{read_text, write_atomic};
use crate::store::export_file_name;

/// Returns where `export` writes when no `--output` is given.
pub(crate) fn default_export_path() -> PathBuf {
    PathBuf::from(export_file_name(Utc::now().date_naive()))
}

pub fn handle_export(args: &ExportArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let payload = store.export_all().with_context(|| "failed to export notes")?;

    if args.stdout {
        println!("{}", payload);
        return Ok(());
    }

    let path = args.output.clone().unwrap_or_else(default_export_path);
    write_atomic(&path, &payload)
        .with_context(|| format!("failed to write export file: {}", path.display()))?;

    println!("Exported {} notes to {}", store.len(), path.display());
    Ok(())
}

pub fn handle_import(args: &ImportArgs, data_dir: &Path) -> Result<()> {
    let payload = read_text(&args.path)
        .with_context(|| format!("failed to read import file: {}", args.path.display()))?;

    let mut store = open_store(data_dir)?;
    let merged = store
        .import_merge(&payload)
        .with_context(|| format!("failed to import {}", args.path.display()))?;

    println!("Imported {} notes", merged);
    Ok(())
}
