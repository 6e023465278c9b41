//! regform-tui - Terminal UI for regform
//!
//! This crate provides the ratatui-based terminal interface. It renders the
//! [`regform_app::AppState`] model, polls crossterm for key presses and feeds
//! them to the regform-app update loop.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::view;
pub use runner::run;
