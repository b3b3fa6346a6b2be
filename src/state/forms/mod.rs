//! Form domain layer
//!
//! Type-safe field values and the registration form model.

mod field;
mod registration_form;

pub use field::{FieldName, FormField};
pub use registration_form::{FormFocus, RegistrationForm, Role};
