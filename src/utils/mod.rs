//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json`] / [`fetch_text`] - Same-origin GET with an optional timeout
//! - [`dom`] - Window access and console logging

pub mod dom;
mod fetch;

pub use fetch::{fetch_json, fetch_text};
