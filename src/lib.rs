//! regform - A terminal registration form with validation and a confirm flow
//!
//! The binary runs either the ratatui front end from `regform-tui` or the
//! NDJSON [`headless`] mode defined here.

pub mod headless;

pub use headless::run_headless;
