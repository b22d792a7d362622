//! Authentication endpoints.

use super::http::{self, ApiError};
use super::types::{Envelope, RegisterRequest, TokenResponse, User};

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// The backend consumes form fields here, not JSON, and returns the token
/// response unwrapped.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    http::post_form(
        "/auth/login",
        &[("username", username), ("password", password)],
    )
    .await
}

/// Register a new identity via `POST /auth/register`.
///
/// Registration returns the created profile only; it never issues a token.
pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
    let envelope: Envelope<User> = http::post_json("/auth/register", request).await?;
    Ok(envelope.data)
}

/// Fetch the authenticated profile via `GET /auth/me`.
pub async fn current_user() -> Result<User, ApiError> {
    let envelope: Envelope<User> = http::get_json("/auth/me").await?;
    Ok(envelope.data)
}
