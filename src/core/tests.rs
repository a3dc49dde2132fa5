#[cfg(test)]
mod tests {
    use crate::core::auth::{
        AuthFailure, CallOutcome, DASHBOARD_PATH, FALLBACK_AUTH_FAILED, FALLBACK_OTP_FAILED,
        FALLBACK_REGISTERED, FormMode, FormState, LOGIN_PATH, LoginSuccess, OtpFailure, Phase,
        RegisterSuccess, Role, SubmitCall, SubmitEffect, normalize_register_message,
    };

    fn login_form(email: &str, password: &str) -> FormState {
        let mut state = FormState::new(FormMode::Login);
        state.email = email.to_string();
        state.password = password.to_string();
        state
    }

    fn register_form(email: &str, password: &str, role: Role) -> FormState {
        let mut state = FormState::new(FormMode::Register);
        state.email = email.to_string();
        state.password = password.to_string();
        state.role = role;
        state
    }

    #[test]
    fn test_new_form_defaults() {
        let state = FormState::new(FormMode::Register);

        assert_eq!(state.phase, Phase::Input);
        assert_eq!(state.role, Role::User);
        assert!(!state.submitting);
        assert!(state.error.is_none());
        assert!(state.notice.is_none());
        assert!(state.shows_role());
        assert!(!state.shows_otp());
    }

    #[test]
    fn test_login_form_never_shows_role_or_otp() {
        let state = FormState::new(FormMode::Login);

        assert!(!state.shows_role());
        assert!(!state.shows_otp());
    }

    #[test]
    fn test_begin_submit_issues_login_call() {
        let mut state = login_form("a@b.com", "hunter2");

        let call = state.begin_submit();

        assert_eq!(
            call,
            Some(SubmitCall::Login {
                email: "a@b.com".to_string(),
                password: "hunter2".to_string(),
            })
        );
        assert!(state.submitting);
    }

    #[test]
    fn test_begin_submit_guards_reentry() {
        let mut state = login_form("a@b.com", "hunter2");

        assert!(state.begin_submit().is_some());
        // a second submit while the first is in flight must be a no-op
        assert!(state.begin_submit().is_none());
        assert!(state.submitting);
    }

    #[test]
    fn test_begin_submit_clears_previous_messages() {
        let mut state = login_form("a@b.com", "hunter2");
        state.error = Some("old error".to_string());
        state.notice = Some("old notice".to_string());

        state.begin_submit();

        assert!(state.error.is_none());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_login_success_persists_and_navigates() {
        let mut state = login_form("a@b.com", "hunter2");
        state.begin_submit();

        let effect = state.finish_submit(CallOutcome::Login(Ok(LoginSuccess {
            token: Some("jwt-token".to_string()),
        })));

        assert_eq!(
            effect,
            SubmitEffect::PersistAndNavigate {
                token: "jwt-token".to_string(),
                path: DASHBOARD_PATH,
            }
        );
        assert!(!state.submitting);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_login_success_without_token_is_failure() {
        let mut state = login_form("a@b.com", "hunter2");
        state.begin_submit();

        let effect = state.finish_submit(CallOutcome::Login(Ok(LoginSuccess { token: None })));

        assert_eq!(effect, SubmitEffect::Stay);
        assert_eq!(state.error.as_deref(), Some(FALLBACK_AUTH_FAILED));
        assert!(!state.submitting);
    }

    #[test]
    fn test_login_success_with_empty_token_is_failure() {
        let mut state = login_form("a@b.com", "hunter2");
        state.begin_submit();

        let effect = state.finish_submit(CallOutcome::Login(Ok(LoginSuccess {
            token: Some(String::new()),
        })));

        assert_eq!(effect, SubmitEffect::Stay);
        assert_eq!(state.error.as_deref(), Some(FALLBACK_AUTH_FAILED));
    }

    #[test]
    fn test_login_failure_sets_error_and_does_not_navigate() {
        let mut state = login_form("a@b.com", "wrong");
        state.begin_submit();

        let effect = state.finish_submit(CallOutcome::Login(Err(AuthFailure {
            message: Some("Invalid credentials".to_string()),
        })));

        assert_eq!(effect, SubmitEffect::Stay);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert!(!state.submitting);
    }

    #[test]
    fn test_login_failure_without_message_uses_fallback() {
        let mut state = login_form("a@b.com", "wrong");
        state.begin_submit();

        state.finish_submit(CallOutcome::Login(Err(AuthFailure { message: None })));

        assert_eq!(state.error.as_deref(), Some(FALLBACK_AUTH_FAILED));
    }

    #[test]
    fn test_register_success_enters_otp_phase() {
        let mut state = register_form("a@b.com", "hunter2", Role::User);
        state.begin_submit();

        let effect = state.finish_submit(CallOutcome::Register(Ok(RegisterSuccess {
            body: "Check your email".to_string(),
        })));

        assert_eq!(effect, SubmitEffect::Stay);
        assert_eq!(state.phase, Phase::OtpPending);
        assert_eq!(state.notice.as_deref(), Some("Check your email"));
        assert!(state.error.is_none());
        assert!(!state.submitting);
        // role picker hides, OTP field shows
        assert!(!state.shows_role());
        assert!(state.shows_otp());
    }

    #[test]
    fn test_register_failure_stays_in_input_phase() {
        let mut state = register_form("a@b.com", "hunter2", Role::TeamOwner);
        state.begin_submit();

        let effect = state.finish_submit(CallOutcome::Register(Err(AuthFailure {
            message: Some("Email already taken".to_string()),
        })));

        assert_eq!(effect, SubmitEffect::Stay);
        assert_eq!(state.phase, Phase::Input);
        assert_eq!(state.error.as_deref(), Some("Email already taken"));
        assert!(state.shows_role());
    }

    #[test]
    fn test_otp_phase_submits_verify_call_without_role() {
        let mut state = register_form("a@b.com", "hunter2", Role::Admin);
        state.begin_submit();
        state.finish_submit(CallOutcome::Register(Ok(RegisterSuccess {
            body: "ok".to_string(),
        })));
        state.otp = "123456".to_string();

        let call = state.begin_submit();

        // the next submission carries the OTP, not the role
        assert_eq!(
            call,
            Some(SubmitCall::VerifyOtp {
                email: "a@b.com".to_string(),
                code: "123456".to_string(),
            })
        );
    }

    #[test]
    fn test_verify_success_navigates_to_login() {
        let mut state = register_form("a@b.com", "hunter2", Role::User);
        state.phase = Phase::OtpPending;
        state.otp = "123456".to_string();
        state.begin_submit();

        let effect = state.finish_submit(CallOutcome::Verify(Ok(())));

        assert_eq!(effect, SubmitEffect::Navigate { path: LOGIN_PATH });
        assert!(!state.submitting);
    }

    #[test]
    fn test_verify_failure_keeps_otp_phase() {
        let mut state = register_form("a@b.com", "hunter2", Role::User);
        state.phase = Phase::OtpPending;
        state.otp = "000000".to_string();
        state.begin_submit();

        let effect = state.finish_submit(CallOutcome::Verify(Err(OtpFailure {
            body: "Code expired".to_string(),
        })));

        assert_eq!(effect, SubmitEffect::Stay);
        assert_eq!(state.phase, Phase::OtpPending);
        assert_eq!(state.error.as_deref(), Some("Code expired"));
        assert!(state.shows_otp());
    }

    #[test]
    fn test_verify_failure_with_empty_body_uses_fallback() {
        let mut state = register_form("a@b.com", "hunter2", Role::User);
        state.phase = Phase::OtpPending;
        state.begin_submit();

        state.finish_submit(CallOutcome::Verify(Err(OtpFailure {
            body: "  ".to_string(),
        })));

        assert_eq!(state.error.as_deref(), Some(FALLBACK_OTP_FAILED));
    }

    #[test]
    fn test_full_registration_flow() {
        // register → raw string notice → OTP → verify → navigate to /login
        let mut state = register_form("a@b.com", "x", Role::User);

        let call = state.begin_submit().unwrap();
        assert!(matches!(call, SubmitCall::Register { .. }));

        state.finish_submit(CallOutcome::Register(Ok(RegisterSuccess {
            body: "Check your email".to_string(),
        })));
        assert_eq!(state.notice.as_deref(), Some("Check your email"));
        assert_eq!(state.phase, Phase::OtpPending);

        state.otp = "123456".to_string();
        let call = state.begin_submit().unwrap();
        assert!(matches!(call, SubmitCall::VerifyOtp { .. }));

        let effect = state.finish_submit(CallOutcome::Verify(Ok(())));
        assert_eq!(effect, SubmitEffect::Navigate { path: LOGIN_PATH });
    }

    #[test]
    fn test_retry_after_failure_clears_error() {
        let mut state = login_form("a@b.com", "wrong");
        state.begin_submit();
        state.finish_submit(CallOutcome::Login(Err(AuthFailure {
            message: Some("Invalid credentials".to_string()),
        })));
        assert!(state.error.is_some());

        // the guard released, a retry is allowed and starts clean
        let call = state.begin_submit();
        assert!(call.is_some());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_normalize_register_message_plain_text() {
        assert_eq!(
            normalize_register_message("Check your email"),
            "Check your email"
        );
    }

    #[test]
    fn test_normalize_register_message_structured() {
        assert_eq!(
            normalize_register_message(r#"{"message": "OTP sent to your inbox"}"#),
            "OTP sent to your inbox"
        );
    }

    #[test]
    fn test_normalize_register_message_json_string() {
        assert_eq!(
            normalize_register_message(r#""Check your email""#),
            "Check your email"
        );
    }

    #[test]
    fn test_normalize_register_message_empty_falls_back() {
        assert_eq!(normalize_register_message(""), FALLBACK_REGISTERED);
        assert_eq!(normalize_register_message("   "), FALLBACK_REGISTERED);
    }

    #[test]
    fn test_normalize_register_message_object_without_message_field() {
        // unexpected object shape: surface the raw body rather than guessing
        assert_eq!(
            normalize_register_message(r#"{"status": "ok"}"#),
            r#"{"status": "ok"}"#
        );
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(Role::Admin.as_str(), "ADMIN");
        assert_eq!(Role::TeamOwner.as_str(), "TEAM_OWNER");
        assert_eq!(Role::User.as_str(), "USER");

        assert_eq!(
            serde_json::to_string(&Role::TeamOwner).unwrap(),
            r#""TEAM_OWNER""#
        );
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("TEAM_OWNER"), Some(Role::TeamOwner));
        assert_eq!(Role::parse("nope"), None);
    }

    #[test]
    fn test_failure_display_uses_fallbacks() {
        let failure = AuthFailure { message: None };
        assert_eq!(failure.to_string(), FALLBACK_AUTH_FAILED);

        let failure = AuthFailure {
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(failure.to_string(), "Invalid credentials");

        let failure = OtpFailure {
            body: String::new(),
        };
        assert_eq!(failure.to_string(), FALLBACK_OTP_FAILED);
    }
}
