//! Shared Dioxus components and Google Charts bridge for the presence
//! chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Google Charts rendering via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `controller`: The per-view selection/fetch/render cycle shared by all
//!   four chart apps
//! - `components`: Reusable RSX components (selector, panels, containers)

pub mod components;
pub mod controller;
pub mod js_bridge;
pub mod state;
