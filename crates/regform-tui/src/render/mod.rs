//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use regform_app::AppState;
use regform_core::Phase;

use crate::theme::palette;
use crate::widgets::{self, modal_overlay::centered_rect};

/// Render the complete UI (View function in TEA)
///
/// Pure projection of the state: the form is always drawn, and the summary
/// or success modal is layered on top depending on the phase.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let form_area = form_area(area);
    frame.render_widget(widgets::RegistrationForm::new(state), form_area);

    match state.session.phase() {
        Phase::Editing => {}
        Phase::ReviewingSummary => {
            let modal = widgets::SummaryModal::new(state.session.fields(), &state.settings.form);
            frame.render_widget(modal, area);
        }
        Phase::Success => frame.render_widget(widgets::SuccessModal, area),
    }
}

fn form_area(area: Rect) -> Rect {
    centered_rect(
        widgets::FORM_MAX_WIDTH,
        widgets::RegistrationForm::height(),
        area,
    )
}
