//! SurfApp - location search with current weather and marine conditions
//!
//! The library exposes the app's modules so the binary and the tests share them.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod format;
pub mod reducer;
pub mod state;
pub mod tasks;
