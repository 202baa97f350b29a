//! Layer catalog sidebar.
//!
//! Shows one collapsible entry per catalog group with a tri-state
//! checkbox, and one row per file with its toggle, color picker and load
//! status.

mod group;
mod sidebar;

pub use sidebar::Sidebar;
