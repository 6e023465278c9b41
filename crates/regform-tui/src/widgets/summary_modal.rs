//! Summary modal shown while the user reviews the entered data

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use regform_app::config::FormSettings;
use regform_core::FieldSet;

use super::modal_overlay;
use crate::theme::styles;

const WIDTH: u16 = 56;
const HEIGHT: u16 = 13;

/// Read-only review of the form data. The password is never shown.
pub struct SummaryModal<'a> {
    fields: &'a FieldSet,
    form: &'a FormSettings,
}

impl<'a> SummaryModal<'a> {
    pub fn new(fields: &'a FieldSet, form: &'a FormSettings) -> Self {
        Self { fields, form }
    }

    fn rows(&self) -> [(&'static str, &'a str); 5] {
        [
            ("Name", self.fields.name.as_str()),
            ("Surname", self.fields.surname.as_str()),
            ("Email", self.fields.email.as_str()),
            ("Gender", self.form.gender_label(&self.fields.gender)),
            (
                "Terms",
                if self.fields.terms_accepted {
                    "Yes"
                } else {
                    "No"
                },
            ),
        ]
    }
}

impl Widget for SummaryModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner =
            modal_overlay::render_modal_frame(buf, area, WIDTH, HEIGHT, "Review your details");

        let mut lines = vec![Line::from("")];
        for (label, value) in self.rows() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<9}", label), styles::text_secondary()),
                Span::styled(value.to_string(), styles::text_primary()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(
            Line::from(vec![
                Span::styled("[e]", styles::keybinding()),
                Span::styled(" Edit", styles::text_secondary()),
                Span::raw("    "),
                Span::styled("[Enter]", styles::keybinding()),
                Span::styled(" Confirm", styles::text_secondary()),
            ])
            .alignment(Alignment::Center),
        );

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn fields() -> FieldSet {
        FieldSet {
            name: "Ana".to_string(),
            surname: "Lopez".to_string(),
            email: "ana@test.com".to_string(),
            password: "abcd1234".to_string(),
            gender: "feminine".to_string(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_summary_lists_data_without_password() {
        let fields = fields();
        let form = FormSettings::default();
        let mut term = TestTerminal::new();
        term.render_widget(SummaryModal::new(&fields, &form), term.area());

        assert!(term.buffer_contains("Review your details"));
        assert!(term.buffer_contains("Ana"));
        assert!(term.buffer_contains("Lopez"));
        assert!(term.buffer_contains("ana@test.com"));
        assert!(term.buffer_contains("Feminine"));
        assert!(term.buffer_contains("Yes"));
        assert!(!term.buffer_contains("abcd1234"));
    }

    #[test]
    fn test_summary_shows_action_hints() {
        let fields = fields();
        let form = FormSettings::default();
        let mut term = TestTerminal::new();
        term.render_widget(SummaryModal::new(&fields, &form), term.area());

        assert!(term.buffer_contains("[e] Edit"));
        assert!(term.buffer_contains("[Enter] Confirm"));
    }

    #[test]
    fn test_unknown_gender_value_shown_raw() {
        let mut fields = fields();
        fields.gender = "femenino".to_string();
        let form = FormSettings::default();
        let mut term = TestTerminal::new();
        term.render_widget(SummaryModal::new(&fields, &form), term.area());

        assert!(term.buffer_contains("femenino"));
    }
}
