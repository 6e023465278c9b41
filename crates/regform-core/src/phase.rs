//! Interaction phase of a form session

use serde::{Deserialize, Serialize};

/// Which stage of the registration flow is active
///
/// A session starts in [`Phase::Editing`] and cycles
/// `Editing → ReviewingSummary → Success → Editing` indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Form fields are editable, inline errors shown
    #[default]
    Editing,
    /// Summary modal awaiting confirm or edit
    ReviewingSummary,
    /// Success modal awaiting dismissal
    Success,
}
