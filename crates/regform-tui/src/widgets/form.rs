//! Registration form widget
//!
//! Draws one row per field with its inline validation error underneath,
//! followed by the submit button and the key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use regform_app::{AppState, FormFocus};
use regform_core::FieldName;

use crate::theme::{palette, styles};

/// Widest the form grows on large terminals
pub const FORM_MAX_WIDTH: u16 = 76;

/// Width reserved for the field label column, marker included
const LABEL_WIDTH: u16 = 12;

const PASSWORD_MASK: char = '•';
const CURSOR: &str = "▏";
const GENDER_PLACEHOLDER: &str = "Select...";
const TERMS_TEXT: &str = "I accept the terms and conditions";
const SUBMIT_LABEL: &str = "[ Register ]";

/// The editable form, projected from [`AppState`]
pub struct RegistrationForm<'a> {
    state: &'a AppState,
}

impl<'a> RegistrationForm<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Height the form needs: two rows per field, button, hints, borders
    pub fn height() -> u16 {
        (FieldName::ALL.len() as u16) * 2 + 1 + 1 + 2 + 2
    }

    fn is_focused(&self, field: FieldName) -> bool {
        self.state.focus.field() == Some(field)
    }

    /// Spans for a field's value column
    fn value_spans(&self, field: FieldName, width: usize) -> Vec<Span<'a>> {
        let fields = self.state.session.fields();
        let focused = self.is_focused(field);

        match field {
            FieldName::Terms => {
                let mark = if fields.terms_accepted { "[x] " } else { "[ ] " };
                vec![
                    Span::styled(mark, styles::label(focused)),
                    Span::styled(TERMS_TEXT, styles::text_primary()),
                ]
            }
            FieldName::Gender => {
                let value = fields.gender.as_str();
                let (text, style) = if value.is_empty() {
                    (GENDER_PLACEHOLDER.to_string(), styles::text_muted())
                } else {
                    (
                        self.state.settings.form.gender_label(value).to_string(),
                        styles::text_primary(),
                    )
                };
                if focused {
                    vec![
                        Span::styled("‹ ", styles::keybinding()),
                        Span::styled(text, style),
                        Span::styled(" ›", styles::keybinding()),
                    ]
                } else {
                    vec![Span::styled(text, style)]
                }
            }
            _ => {
                let raw = fields.text(field).unwrap_or_default();
                let shown = if field == FieldName::Password && self.state.settings.ui.mask_password
                {
                    PASSWORD_MASK.to_string().repeat(raw.chars().count())
                } else {
                    raw.to_string()
                };

                let room = if focused {
                    width.saturating_sub(CURSOR.width())
                } else {
                    width
                };
                let mut spans = vec![Span::styled(
                    fit_tail(&shown, room).to_string(),
                    styles::text_primary(),
                )];
                if focused {
                    spans.push(Span::styled(
                        CURSOR,
                        Style::default().fg(palette::BORDER_ACTIVE),
                    ));
                }
                spans
            }
        }
    }

    fn render_field(&self, field: FieldName, area: Rect, buf: &mut Buffer) {
        let focused = self.is_focused(field);
        let marker = if focused { "› " } else { "  " };
        let label = format!("{}{}", marker, field.label());
        let label_width = LABEL_WIDTH as usize;

        let value_width = area.width.saturating_sub(LABEL_WIDTH) as usize;
        let mut spans = vec![Span::styled(
            format!("{:<label_width$}", label),
            styles::label(focused),
        )];
        spans.extend(self.value_spans(field, value_width));
        Paragraph::new(Line::from(spans)).render(Rect { height: 1, ..area }, buf);

        if area.height < 2 {
            return;
        }
        if let Some(message) = self.state.session.errors().get(field) {
            let error_area = Rect {
                x: area.x + LABEL_WIDTH.min(area.width),
                y: area.y + 1,
                width: area.width.saturating_sub(LABEL_WIDTH),
                height: 1,
            };
            Paragraph::new(Span::styled(message.to_string(), styles::field_error()))
                .render(error_area, buf);
        }
    }
}

impl Widget for RegistrationForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Registration ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let content = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let bottom = content.y + content.height;

        let mut y = content.y;
        for field in FieldName::ALL {
            if y >= bottom {
                return;
            }
            let height = 2.min(bottom - y);
            self.render_field(field, Rect { y, height, ..content }, buf);
            y += 2;
        }

        if y < bottom {
            let focused = self.state.focus == FormFocus::Submit;
            Paragraph::new(Span::styled(SUBMIT_LABEL, styles::button(focused)))
                .alignment(Alignment::Center)
                .render(Rect { y, height: 1, ..content }, buf);
            y += 2;
        }

        if y < bottom {
            Paragraph::new(hints_line())
                .alignment(Alignment::Center)
                .render(Rect { y, height: 1, ..content }, buf);
        }
    }
}

fn hints_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in [
        ("Tab/↑↓", "move"),
        ("Space/←→", "choose"),
        ("Enter", "submit"),
        ("Esc", "quit"),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key, styles::keybinding()));
        spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
    }
    Line::from(spans)
}

/// Longest suffix of `text` that fits in `width` terminal cells
///
/// Long values scroll left so the end being typed stays visible.
fn fit_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
