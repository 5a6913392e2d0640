//! Web-specific implementations of the darkwire-game seams
//!
//! Provides the localStorage-backed settings store, loaders over the
//! embedded JSON assets, and re-exports the core crate's types.

use anyhow::Context;
use once_cell::sync::Lazy;

// Re-export all types from darkwire-game
pub use darkwire_game::*;

const IMPLANTS_DATA: &str = include_str!("../static/assets/data/implants.json");
const TUTORIAL_DATA: &str = include_str!("../static/assets/data/tutorial.json");

static IMPLANT_CATALOG: Lazy<ImplantCatalog> = Lazy::new(|| {
    ImplantCatalog::from_json(IMPLANTS_DATA).unwrap_or_else(|err| {
        crate::dom::console_error(&format!("Failed to parse implant catalog: {err}"));
        ImplantCatalog::default()
    })
});

/// The embedded implant catalog. A malformed asset degrades to an empty
/// catalog (the panel shows its placeholder) rather than erroring.
#[must_use]
pub fn implant_catalog() -> &'static ImplantCatalog {
    &IMPLANT_CATALOG
}

/// Build the tutorial over the embedded step-content asset.
///
/// # Errors
///
/// Returns an error if the asset is malformed or leaves any step without
/// content. Either is a fatal configuration error: the tutorial must not run
/// over a registry with holes.
pub fn load_tutorial() -> anyhow::Result<TutorialHandle> {
    let contents =
        StepContentSet::from_json(TUTORIAL_DATA).context("tutorial content asset is malformed")?;
    TutorialHandle::new(contents).context("tutorial content asset is incomplete")
}

/// Web-specific settings store backed by localStorage
pub struct WebSettingsStore;

const SETTINGS_KEY: &str = "darkwire.settings";

#[derive(Debug, thiserror::Error)]
pub enum WebSettingsError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SettingsStore for WebSettingsStore {
    type Error = WebSettingsError;

    fn load(&self) -> Result<Option<Settings>, Self::Error> {
        let Some(storage) = crate::dom::local_storage() else {
            // No browser storage; run with defaults.
            return Ok(None);
        };
        let raw = storage
            .get_item(SETTINGS_KEY)
            .map_err(|err| WebSettingsError::Storage(crate::dom::js_error_message(&err)))?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), Self::Error> {
        let Some(storage) = crate::dom::local_storage() else {
            return Ok(());
        };
        let json = serde_json::to_string(settings)?;
        storage
            .set_item(SETTINGS_KEY, &json)
            .map_err(|err| WebSettingsError::Storage(crate::dom::js_error_message(&err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_and_lists_implants() {
        let catalog = implant_catalog();
        assert!(!catalog.implants.is_empty());
        let listed = catalog.listed();
        assert!(!listed.is_empty());
        // The stackable firmware patch is provider-filtered out of the panel.
        assert!(listed.iter().all(|implant| !implant.repeatable));
        assert!(catalog.implants.iter().any(|implant| implant.repeatable));
    }

    #[test]
    fn embedded_tutorial_covers_every_step() {
        let tutorial = load_tutorial().expect("shipped tutorial asset must be total");
        assert_eq!(tutorial.step(), TutorialStep::Start);
        assert!(tutorial.is_running());
        // The opening step lets the player advance freely.
        assert!(tutorial.current_content().unwrap().can_advance);
    }

    #[test]
    fn settings_store_is_inert_without_a_browser() {
        let store = WebSettingsStore;
        assert!(store.load().unwrap().is_none());
        store.save(&Settings::default()).unwrap();
        assert_eq!(load_settings(&store).unwrap(), Settings::default());
    }
}
