//! Authentication flow: state machine and backend client.

pub mod client;
mod machine;

pub use machine::{
    AuthFailure, CallOutcome, DASHBOARD_PATH, FALLBACK_AUTH_FAILED, FALLBACK_OTP_FAILED,
    FALLBACK_REGISTERED, FormMode, FormState, LOGIN_PATH, LoginSuccess, OtpFailure, Phase,
    RegisterSuccess, Role, SubmitCall, SubmitEffect, normalize_register_message,
};
