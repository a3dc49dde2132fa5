//! Authentication UI module
//!
//! The shared login/registration form, the session context, and the session
//! cookie helpers.

mod auth_form;
mod context;
pub mod session;

pub use auth_form::AuthForm;
pub use context::{AuthContext, SessionState, provide_auth_context, use_auth_context};
