//! Player preferences and the storage seam behind them
use serde::{Deserialize, Serialize};

/// Ordering applied to the installed-implants list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImplantSortOrder {
    /// The order implants were acquired in (the stored order).
    #[default]
    Acquisition,
    /// Case-insensitive order by display name.
    Alphabetical,
}

fn default_theme_accent() -> String {
    Settings::DEFAULT_THEME_ACCENT.to_string()
}

/// Preferences persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub implant_sort_order: ImplantSortOrder,
    /// Display-only accent color. Never feeds any logic.
    #[serde(default = "default_theme_accent")]
    pub theme_accent: String,
}

impl Settings {
    pub const DEFAULT_THEME_ACCENT: &'static str = "#00d9c0";
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            implant_sort_order: ImplantSortOrder::default(),
            theme_accent: default_theme_accent(),
        }
    }
}

/// Trait for abstracting preference persistence.
/// Platform-specific implementations should provide this.
pub trait SettingsStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load previously saved settings, if any exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self) -> Result<Option<Settings>, Self::Error>;

    /// Persist the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), Self::Error>;
}

/// Load saved settings, falling back to defaults when nothing was stored.
///
/// # Errors
///
/// Returns an error if the backing store cannot be read.
pub fn load_settings<S>(store: &S) -> anyhow::Result<Settings>
where
    S: SettingsStore,
    S::Error: Into<anyhow::Error>,
{
    Ok(store.load().map_err(Into::into)?.unwrap_or_default())
}
