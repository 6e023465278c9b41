//! Read-only view of a form session handed to renderers

use regform_core::{ErrorMap, FieldSet, Phase};
use serde::Serialize;

/// Copy of `{fields, errors, phase}` taken after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub phase: Phase,
    pub fields: FieldSet,
    pub errors: ErrorMap,
}
