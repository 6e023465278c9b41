//! Abstract input key event, independent of terminal library.
//!
//! This module defines the `InputKey` enum which abstracts keyboard input
//! from the underlying terminal library (crossterm). This keeps regform-app
//! free of terminal-specific types so non-TUI front ends (headless mode,
//! tests) drive the same update loop.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
    CharCtrl(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Home key
    Home,
    /// End key
    End,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
}
