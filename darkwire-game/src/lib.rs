//! Darkwire UI Core
//!
//! Platform-agnostic logic backing the Darkwire front-end: the installed
//! implants list (filtering, sorting, catalog data) and the interactive
//! tutorial state machine. This crate has no UI or platform dependencies;
//! the web crate supplies storage and rendering.

pub mod implants;
pub mod settings;
pub mod tutorial;

// Re-export commonly used types
pub use implants::{Implant, ImplantCatalog, matches_query, resolve_selection, visible_implants};
pub use settings::{ImplantSortOrder, Settings, SettingsStore, load_settings};
pub use tutorial::{
    StepContent, StepContentSet, TutorialController, TutorialError, TutorialHandle,
    TutorialMachine, TutorialStep, TutorialSubscription,
};
