//! Theme command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_kv;
use crate::cli::{ThemeAction, ThemeArgs};
use crate::domain::Theme;
use crate::infra::SqliteStore;
use crate::store::{load_theme, save_theme, toggle_theme};

pub fn handle_theme(args: &ThemeArgs, data_dir: &Path) -> Result<()> {
    let mut kv = open_kv(data_dir)?;

    let theme = match args.action {
        None => load_theme(&kv).with_context(|| "failed to read theme")?,
        Some(ThemeAction::Toggle) => {
            toggle_theme(&mut kv).with_context(|| "failed to toggle theme")?
        }
        Some(ThemeAction::Light) => set(&mut kv, Theme::Light)?,
        Some(ThemeAction::Dark) => set(&mut kv, Theme::Dark)?,
    };

    println!("{}", theme);
    Ok(())
}

fn set(kv: &mut SqliteStore, theme: Theme) -> Result<Theme> {
    save_theme(kv, theme).with_context(|| "failed to save theme")?;
    Ok(theme)
}
