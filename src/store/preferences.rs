//! Theme preference persisted alongside the notes.

use super::StoreResult;
use crate::domain::Theme;
use crate::infra::KeyValueStore;

/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Reads the saved theme. Missing or unrecognized values mean light.
pub fn load_theme<S: KeyValueStore>(kv: &S) -> StoreResult<Theme> {
    let theme = kv
        .get(THEME_KEY)?
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();
    Ok(theme)
}

/// Saves the theme preference.
pub fn save_theme<S: KeyValueStore>(kv: &mut S, theme: Theme) -> StoreResult<()> {
    kv.set(THEME_KEY, theme.as_str())?;
    log::debug!("theme set to {theme}");
    Ok(())
}

/// Switches between light and dark, returning the theme now in effect.
pub fn toggle_theme<S: KeyValueStore>(kv: &mut S) -> StoreResult<Theme> {
    let theme = load_theme(&*kv)?.toggled();
    save_theme(kv, theme)?;
    Ok(theme)
}
