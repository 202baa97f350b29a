//! UI components built with Leptos.
//!
//! - [`sidebar`] - Catalog tree with layer toggles and color pickers
//! - [`map`] - Map view, toolbar, basemap switcher and attribute inspector
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod map;
pub mod sidebar;
mod spinner;

pub use map::MapView;
pub use sidebar::Sidebar;
pub use spinner::Spinner;
