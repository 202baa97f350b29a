//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuHand as Navigate,
        LuLayers as Layers, LuLoaderCircle as Loading, LuMousePointerClick as Select,
        LuRefreshCw as Refresh, LuSquareDashed as Draw, LuTrash2 as Trash,
        LuTriangleAlert as Warning, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowRepeat as Loading, BsBoundingBox as Draw,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsCursor as Select,
        BsExclamationTriangle as Warning, BsHandIndex as Navigate, BsLayers as Layers,
        BsTrash as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(NAVIGATE, Navigate);
themed_icon!(SELECT, Select);
themed_icon!(DRAW, Draw);
themed_icon!(TRASH, Trash);
themed_icon!(REFRESH, Refresh);
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(LAYERS, Layers);
themed_icon!(LOADING, Loading);
themed_icon!(WARNING, Warning);
