//! Custom widget components

mod form;
pub mod modal_overlay;
mod success_modal;
mod summary_modal;

pub use form::{RegistrationForm, FORM_MAX_WIDTH};
pub use success_modal::{SuccessModal, SUCCESS_MESSAGE};
pub use summary_modal::SummaryModal;
