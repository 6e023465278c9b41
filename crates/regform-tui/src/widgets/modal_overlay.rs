//! Shared modal overlay utilities.
//!
//! The summary and success modals both dim the form behind them, cast a
//! shadow and draw a rounded block; [`render_modal_frame`] does all of it
//! and hands back the inner area.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::{palette, styles};

/// Center a fixed-size rect within an area, clamped to the area.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use regform_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area so the modal stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);

    for y in modal_rect.y.saturating_add(1)..bottom_y.saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    for x in modal_rect.x.saturating_add(1)..right_x.saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Dim `area`, then draw a titled modal of the given size centered in it.
///
/// Returns the inner area of the modal block.
pub fn render_modal_frame(
    buf: &mut Buffer,
    area: Rect,
    width: u16,
    height: u16,
    title: &str,
) -> Rect {
    dim_background(buf, area);

    let modal = centered_rect(width, height, area);
    render_shadow(buf, modal);
    Clear.render(modal, buf);

    let title = format!(" {} ", title);
    let block = styles::modal_block(&title).title_alignment(Alignment::Center);
    let inner = block.inner(modal);
    block.render(modal, buf);
    inner
}
