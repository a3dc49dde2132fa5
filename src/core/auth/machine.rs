//! Authentication form state machine
//!
//! Models the login/registration flow as a small finite-state machine over
//! form mode and submission phase. The machine is pure: `begin_submit`
//! decides which backend call to issue (or rejects a re-entrant submit), and
//! `finish_submit` applies the call's outcome and tells the caller which side
//! effect to perform. All network and browser work lives in the component and
//! the HTTP client, which keeps this module testable on any target.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback error for rejected or malformed login/registration responses.
pub const FALLBACK_AUTH_FAILED: &str = "Authentication failed";
/// Fallback error for a rejected OTP verification with an empty body.
pub const FALLBACK_OTP_FAILED: &str = "Invalid OTP or verification failed";
/// Fallback notice when a successful registration carries no message.
pub const FALLBACK_REGISTERED: &str = "Registration successful";

/// Route targets used by submit side effects.
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/login";

/// Which form the component renders. Fixed for the lifetime of one mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Register,
}

/// Account role requested at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    TeamOwner,
    #[default]
    User,
}

impl Role {
    /// Wire value sent to the backend and used as the `<select>` option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::TeamOwner => "TEAM_OWNER",
            Role::User => "USER",
        }
    }

    /// Human-readable label for the role picker.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::TeamOwner => "Team Owner",
            Role::User => "User",
        }
    }

    /// Parse a wire value back into a role. Unknown values map to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "TEAM_OWNER" => Some(Role::TeamOwner),
            "USER" => Some(Role::User),
            _ => None,
        }
    }

    pub const ALL: [Role; 3] = [Role::Admin, Role::TeamOwner, Role::User];
}

/// Sub-state within `FormMode::Register` distinguishing initial-credentials
/// entry from OTP entry. Login never leaves `Input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Input,
    OtpPending,
}

/// The form's entire mutable state. Owned by exactly one mounted component
/// and discarded on unmount.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub otp: String,
    pub phase: Phase,
    pub submitting: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl FormState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            email: String::new(),
            password: String::new(),
            role: Role::default(),
            otp: String::new(),
            phase: Phase::default(),
            submitting: false,
            error: None,
            notice: None,
        }
    }

    /// True while the role picker should be visible: registration before the
    /// OTP phase has been entered.
    pub fn shows_role(&self) -> bool {
        self.mode == FormMode::Register && self.phase == Phase::Input
    }

    /// True while the OTP input should be visible.
    pub fn shows_otp(&self) -> bool {
        self.mode == FormMode::Register && self.phase == Phase::OtpPending
    }

    /// Start a submission. Returns the backend call to issue, or `None` if a
    /// call is already in flight (re-entrant submits are no-ops). Clears any
    /// previous error and notice before attempting.
    pub fn begin_submit(&mut self) -> Option<SubmitCall> {
        if self.submitting {
            return None;
        }
        self.error = None;
        self.notice = None;
        self.submitting = true;

        Some(match (self.mode, self.phase) {
            (FormMode::Login, _) => SubmitCall::Login {
                email: self.email.clone(),
                password: self.password.clone(),
            },
            (FormMode::Register, Phase::Input) => SubmitCall::Register {
                email: self.email.clone(),
                password: self.password.clone(),
                role: self.role,
            },
            (FormMode::Register, Phase::OtpPending) => SubmitCall::VerifyOtp {
                email: self.email.clone(),
                code: self.otp.clone(),
            },
        })
    }

    /// Apply the outcome of the in-flight call. Always clears `submitting`.
    /// A failure never regresses the phase: once the OTP field is revealed it
    /// stays visible for retry.
    pub fn finish_submit(&mut self, outcome: CallOutcome) -> SubmitEffect {
        self.submitting = false;

        match outcome {
            CallOutcome::Login(Ok(success)) => match success.token {
                Some(token) if !token.is_empty() => SubmitEffect::PersistAndNavigate {
                    token,
                    path: DASHBOARD_PATH,
                },
                // 2xx without a token is an unexpected response shape
                _ => {
                    self.error = Some(FALLBACK_AUTH_FAILED.to_string());
                    SubmitEffect::Stay
                }
            },
            CallOutcome::Login(Err(failure)) | CallOutcome::Register(Err(failure)) => {
                self.error = Some(
                    failure
                        .message
                        .unwrap_or_else(|| FALLBACK_AUTH_FAILED.to_string()),
                );
                SubmitEffect::Stay
            }
            CallOutcome::Register(Ok(success)) => {
                self.notice = Some(normalize_register_message(&success.body));
                self.error = None;
                self.phase = Phase::OtpPending;
                SubmitEffect::Stay
            }
            CallOutcome::Verify(Ok(())) => SubmitEffect::Navigate { path: LOGIN_PATH },
            CallOutcome::Verify(Err(failure)) => {
                self.error = Some(otp_failure_text(&failure.body).to_string());
                SubmitEffect::Stay
            }
        }
    }
}

/// The single backend call a submission issues, chosen by the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitCall {
    Login {
        email: String,
        password: String,
    },
    Register {
        email: String,
        password: String,
        role: Role,
    },
    VerifyOtp {
        email: String,
        code: String,
    },
}

/// Successful login response. The token is optional because the backend has
/// been observed to answer 2xx without one; the machine treats that as a
/// failure rather than persisting an empty session.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSuccess {
    pub token: Option<String>,
}

/// Successful registration response, kept as the raw body. The backend
/// answers either plain text or JSON `{"message": ...}` depending on the
/// path taken server-side; `normalize_register_message` resolves both.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterSuccess {
    pub body: String,
}

/// Login or registration rejected by the backend. The message is whatever the
/// failure payload carried, if anything.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", .message.as_deref().unwrap_or(FALLBACK_AUTH_FAILED))]
pub struct AuthFailure {
    pub message: Option<String>,
}

/// OTP verification rejected. Carries the raw response body text.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", otp_failure_text(.body))]
pub struct OtpFailure {
    pub body: String,
}

/// Failure detail for a rejected verification: the body text, or the generic
/// fallback when the body is blank.
fn otp_failure_text(body: &str) -> &str {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        FALLBACK_OTP_FAILED
    } else {
        trimmed
    }
}

/// Tagged result of the in-flight call, fed back into `finish_submit`.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    Login(Result<LoginSuccess, AuthFailure>),
    Register(Result<RegisterSuccess, AuthFailure>),
    Verify(Result<(), OtpFailure>),
}

/// Side effect the component must perform after `finish_submit`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitEffect {
    /// Nothing beyond the state change already applied.
    Stay,
    /// Write the session cookie, then navigate.
    PersistAndNavigate { token: String, path: &'static str },
    /// Navigate without touching the session.
    Navigate { path: &'static str },
}

/// Resolve a registration success body into a human-readable notice.
///
/// Accepts JSON `{"message": "..."}`, a JSON string literal, or plain text;
/// an empty body falls back to a generic confirmation. The double shape is an
/// upstream inconsistency worth confirming with the backend owners, so both
/// are handled explicitly here instead of assuming one.
pub fn normalize_register_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(text) = value.as_str() {
            return text.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        FALLBACK_REGISTERED.to_string()
    } else {
        trimmed.to_string()
    }
}
