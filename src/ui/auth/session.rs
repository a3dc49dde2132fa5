//! Session cookie helpers
//!
//! The session credential is a `token` cookie scoped to the whole origin so
//! it rides along with every request to protected routes. Script-written
//! cookies cannot be HttpOnly; hardening that belongs to the backend issuing
//! a `Set-Cookie` header instead.

/// Cookie name holding the session token.
pub const SESSION_COOKIE: &str = "token";

#[cfg(not(feature = "ssr"))]
fn html_document() -> Result<web_sys::HtmlDocument, String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .ok_or("No window available")?
        .document()
        .ok_or("No document available")?;
    document
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| "Document is not an HTML document".to_string())
}

/// Store the session token in the cookie.
#[cfg(not(feature = "ssr"))]
pub fn persist_token(token: &str) -> Result<(), String> {
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; Secure; SameSite=Strict");
    html_document()?
        .set_cookie(&cookie)
        .map_err(|_| "Failed to write session cookie".to_string())
}

/// Read the session token from the cookie, if present and non-empty.
#[cfg(not(feature = "ssr"))]
pub fn session_token() -> Option<String> {
    let cookies = html_document().ok()?.cookie().ok()?;
    let prefix = format!("{SESSION_COOKIE}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(prefix.as_str()))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Drop the session cookie (sign out).
#[cfg(not(feature = "ssr"))]
pub fn clear_token() -> Result<(), String> {
    let cookie = format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; Secure; SameSite=Strict");
    html_document()?
        .set_cookie(&cookie)
        .map_err(|_| "Failed to clear session cookie".to_string())
}

/// SSR stubs - there is no session cookie to read on the server
#[cfg(feature = "ssr")]
pub fn persist_token(_token: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(feature = "ssr")]
pub fn session_token() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn clear_token() -> Result<(), String> {
    Ok(())
}
