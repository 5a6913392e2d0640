pub mod installed_implants;
pub mod tutorial_overlay;
