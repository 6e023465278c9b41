//! Success modal shown after the registration is confirmed

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

pub const SUCCESS_MESSAGE: &str = "Registration successful! Your details were submitted.";

const WIDTH: u16 = 50;
const HEIGHT: u16 = 8;

pub struct SuccessModal;

impl Widget for SuccessModal {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = modal_overlay::render_modal_frame(buf, area, WIDTH, HEIGHT, "Done");

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(SUCCESS_MESSAGE, styles::success())),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", styles::keybinding()),
                Span::styled(" Close", styles::text_secondary()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
