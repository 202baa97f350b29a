//! DOM and Web API utility functions.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// True if `name` is defined on `window`, e.g. a library loaded from a
/// `<script>` tag.
pub fn has_global(name: &str) -> bool {
    window()
        .and_then(|w| Reflect::get(&w, &JsValue::from_str(name)).ok())
        .is_some_and(|value| !value.is_undefined() && !value.is_null())
}

/// Log an error to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Log a warning to the browser console.
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
