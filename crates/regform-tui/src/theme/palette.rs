//! Color palette for the form TUI.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::DarkGray; // Modal backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Magenta; // Submit button and focus marker
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success
pub const STATUS_RED: Color = Color::Red; // Validation errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Key hints

// --- Effects ---
pub const SHADOW: Color = Color::Black;
