//! Shared Dioxus components and D3.js bridge for the Climate Data Explorer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `theme`: CSS-variable theme with dark/light modes
//! - `components`: Reusable RSX components (selectors, panels, chat, tour)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod theme;
