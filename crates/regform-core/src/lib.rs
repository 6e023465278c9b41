//! # regform-core - Core Domain Types
//!
//! Foundation crate for regform. Provides the form's domain types, the field
//! validator, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Fields (`fields`)
//! - [`FieldName`] - The six form fields, in display order
//! - [`FieldSet`] - Raw values of every field
//! - [`FieldUpdate`] - Typed change to exactly one field
//! - [`GenderOption`] - One selectable gender value with its label
//!
//! ### Validation (`validation`)
//! - [`validate()`] - Compute the full [`ErrorMap`] for a [`FieldSet`]
//! - [`validate_field()`] - Message for a single field
//!
//! ### Phase (`phase`)
//! - [`Phase`] - Editing, reviewing summary or success
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use regform_core::prelude::*;
//! ```

pub mod error;
pub mod fields;
pub mod logging;
pub mod phase;
pub mod prelude;
pub mod validation;

pub use error::{Error, Result, ResultExt};
pub use fields::{FieldName, FieldSet, FieldUpdate, GenderOption};
pub use phase::Phase;
pub use validation::{
    is_valid_email, is_valid_name, is_valid_password, validate, validate_field, ErrorMap,
};
