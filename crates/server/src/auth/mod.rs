pub mod cookies;
pub mod jwt;
pub mod middleware;
pub mod password;

use dioxus::prelude::ServerFnError;
use shared_types::{AppError, Role};

use crate::error_convert::AppErrorExt;

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
/// Returns the validated Claims or an "Authentication required" error.
pub fn require_auth() -> Result<jwt::Claims, ServerFnError> {
    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    // Primary: Claims already validated by auth middleware
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    // Fallback: parse the session token from cookies/Bearer header
    let headers = parts.headers.clone();
    let token = cookies::extract_session_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired session").into_server_fn_error())
}

/// Require the caller to hold one of the given roles.
pub fn require_role(allowed: &[Role]) -> Result<jwt::Claims, ServerFnError> {
    let claims = require_auth()?;
    let role = Role::from_str_or_default(&claims.role);
    if !allowed.contains(&role) {
        return Err(AppError::forbidden("Insufficient role for this operation")
            .into_server_fn_error());
    }
    Ok(claims)
}
