//! String and form-control helpers shared across site frontends.
//!
//! The `utils` module holds pure string/list helpers; the `controls` module
//! models a document of form controls and the checkbox-to-hidden-input sync
//! used by edit forms.

pub mod controls;
pub mod utils;

pub use controls::{Checkbox, CheckboxRef, Control, Document, DocumentError, TextInput};
