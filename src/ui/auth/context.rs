//! Auth context for the session state shared across pages
//!
//! Pages use this to redirect signed-in visitors away from the login and
//! register forms and anonymous visitors away from the dashboard. The form
//! component marks the session signed-in right after persisting the cookie so
//! guards react without a re-read.

use leptos::prelude::*;

/// Whether a session cookie is present for this visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Not yet checked (pre-hydration)
    #[default]
    Unknown,
    Anonymous,
    SignedIn,
}

/// Session context provided at the application root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<SessionState>,
}

impl AuthContext {
    pub fn is_signed_in(&self) -> bool {
        self.session.get() == SessionState::SignedIn
    }

    pub fn mark_signed_in(&self) {
        self.session.set(SessionState::SignedIn);
    }

    pub fn mark_anonymous(&self) {
        self.session.set(SessionState::Anonymous);
    }
}

/// Provide the session context to the component tree.
///
/// Starts as `Unknown` on both server and client to avoid a hydration
/// mismatch; the cookie is inspected in an effect after hydration.
pub fn provide_auth_context() -> AuthContext {
    let session = RwSignal::new(SessionState::Unknown);
    let ctx = AuthContext { session };

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if super::session::session_token().is_some() {
            session.set(SessionState::SignedIn);
        } else {
            session.set(SessionState::Anonymous);
        }
    });

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree.
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
