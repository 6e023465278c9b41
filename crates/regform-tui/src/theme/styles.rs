//! Semantic style builders for the form TUI.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Form styles ---
pub fn label(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::BORDER_ACTIVE)
            .add_modifier(Modifier::BOLD)
    } else {
        text_secondary()
    }
}

pub fn field_error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn success() -> Style {
    Style::default()
        .fg(palette::STATUS_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Key hint such as `[Enter]`
pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::BOLD)
}

pub fn button(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
