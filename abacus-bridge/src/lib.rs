//! Abacus Bridge library target.
//!
//! Exposes the GUI modules for integration tests. The binary entry point
//! is in `main.rs`.

pub mod app;
pub mod keyboard;
pub mod messages;
pub mod renderer;
pub mod update;
pub mod view_ui;
