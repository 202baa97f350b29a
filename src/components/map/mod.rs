//! Map view and its overlay controls.

mod basemap;
mod inspector;
mod map_view;
mod toolbar;

pub use basemap::BasemapSwitcher;
pub use inspector::Inspector;
pub use map_view::MapView;
pub use toolbar::Toolbar;
