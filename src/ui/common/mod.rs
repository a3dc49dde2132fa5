//! Common reusable UI components shared across pages.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{FormField, SelectField};
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::{InlineSpinner, Spinner, SpinnerSize};
