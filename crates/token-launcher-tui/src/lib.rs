//! token-launcher-tui: Terminal UI for token-launcher
//!
//! This crate provides a Ratatui-based TUI using the Component pattern.
//! Mouse presses are broadcast through a pointer hub before components
//! see them, which is how the payment popover notices outside presses.

pub mod action;
pub mod app;
pub mod clipboard;
pub mod components;
pub mod file_picker;
pub mod tui;

pub use app::App;
