//! HTTP client for the authentication backend
//!
//! Thin wrapper over `gloo-net` that turns the three auth endpoints into the
//! tagged results the state machine consumes. Only compiled for the browser;
//! the server build gets stubs that report the operation as unavailable.

use serde::{Deserialize, Serialize};

use super::machine::{
    AuthFailure, CallOutcome, LoginSuccess, OtpFailure, RegisterSuccess, Role, SubmitCall,
};

#[cfg(not(feature = "ssr"))]
const LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(not(feature = "ssr"))]
const REGISTER_ENDPOINT: &str = "/api/auth/register";
#[cfg(not(feature = "ssr"))]
const VERIFY_ENDPOINT: &str = "/api/auth/verify";

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct VerifyRequest<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct LoginResponse {
    token: Option<String>,
}

/// Failure payload shape used by the backend for rejected credentials.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ErrorResponse {
    message: String,
}

/// Issue the backend call a submission decided on and tag the outcome for
/// `FormState::finish_submit`.
pub async fn dispatch(call: SubmitCall) -> CallOutcome {
    match call {
        SubmitCall::Login { email, password } => CallOutcome::Login(login(&email, &password).await),
        SubmitCall::Register {
            email,
            password,
            role,
        } => CallOutcome::Register(register(&email, &password, role).await),
        SubmitCall::VerifyOtp { email, code } => CallOutcome::Verify(verify(&email, &code).await),
    }
}

/// Exchange credentials for a session token.
#[cfg(not(feature = "ssr"))]
pub async fn login(email: &str, password: &str) -> Result<LoginSuccess, AuthFailure> {
    use gloo_net::http::Request;

    let response = Request::post(LOGIN_ENDPOINT)
        .json(&LoginRequest { email, password })
        .map_err(transport_failure)?
        .send()
        .await
        .map_err(transport_failure)?;

    if response.ok() {
        let body: LoginResponse = response.json().await.map_err(|_| AuthFailure {
            // 2xx with an unreadable body: same treatment as a missing token
            message: None,
        })?;
        Ok(LoginSuccess { token: body.token })
    } else {
        Err(failure_from_body(response).await)
    }
}

/// Create an account. On success the raw body is returned untouched; the
/// state machine normalizes the string-or-object shape.
#[cfg(not(feature = "ssr"))]
pub async fn register(
    email: &str,
    password: &str,
    role: Role,
) -> Result<RegisterSuccess, AuthFailure> {
    use gloo_net::http::Request;

    let response = Request::post(REGISTER_ENDPOINT)
        .json(&RegisterRequest {
            email,
            password,
            role,
        })
        .map_err(transport_failure)?
        .send()
        .await
        .map_err(transport_failure)?;

    if response.ok() {
        let body = response.text().await.unwrap_or_default();
        Ok(RegisterSuccess { body })
    } else {
        Err(failure_from_body(response).await)
    }
}

/// Verify the one-time passcode mailed after registration. Any 2xx status is
/// success; the failure detail is the raw body text.
#[cfg(not(feature = "ssr"))]
pub async fn verify(email: &str, code: &str) -> Result<(), OtpFailure> {
    use gloo_net::http::Request;

    let response = Request::post(VERIFY_ENDPOINT)
        .json(&VerifyRequest { email, code })
        .map_err(|err| OtpFailure {
            body: err.to_string(),
        })?
        .send()
        .await
        .map_err(|err| OtpFailure {
            body: err.to_string(),
        })?;

    if response.ok() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(OtpFailure { body })
    }
}

/// Extract the failure message from a non-2xx response. Prefers the
/// structured `{message}` shape, falls back to the raw body text, and leaves
/// the message empty when the body is too.
#[cfg(not(feature = "ssr"))]
async fn failure_from_body(response: gloo_net::http::Response) -> AuthFailure {
    let message = match response.text().await {
        Ok(text) => {
            if let Ok(err) = serde_json::from_str::<ErrorResponse>(&text) {
                Some(err.message)
            } else if text.trim().is_empty() {
                None
            } else {
                Some(text)
            }
        }
        Err(_) => None,
    };
    AuthFailure { message }
}

#[cfg(not(feature = "ssr"))]
fn transport_failure(err: gloo_net::Error) -> AuthFailure {
    AuthFailure {
        message: Some(err.to_string()),
    }
}

#[cfg(feature = "ssr")]
pub async fn login(_email: &str, _password: &str) -> Result<LoginSuccess, AuthFailure> {
    Err(AuthFailure {
        message: Some("Login is only available in the browser".to_string()),
    })
}

#[cfg(feature = "ssr")]
pub async fn register(
    _email: &str,
    _password: &str,
    _role: Role,
) -> Result<RegisterSuccess, AuthFailure> {
    Err(AuthFailure {
        message: Some("Registration is only available in the browser".to_string()),
    })
}

#[cfg(feature = "ssr")]
pub async fn verify(_email: &str, _code: &str) -> Result<(), OtpFailure> {
    Err(OtpFailure {
        body: "Verification is only available in the browser".to_string(),
    })
}
