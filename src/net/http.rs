//! HTTP dispatch core shared by every typed endpoint function.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two behaviors apply to every call regardless of which endpoint issued it:
//! the currently stored bearer token is attached on the way out, and a 401
//! response invalidates the persisted session and redirects to `/login` on
//! the way in. The login and register endpoints are exempt from the 401
//! handling because their failure paths belong to the session store.
//!
//! ERROR HANDLING
//! ==============
//! Callers get an [`ApiError`] classifying transport failures, the fixed
//! 10-second timeout, structured status rejections (with the backend's
//! `detail` message when present), and decode failures. Non-browser builds
//! fail soft with [`ApiError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(feature = "csr")]
use crate::state::persist;

/// Fixed timeout applied to every request, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Failure of a REST call, classified for the session store and views.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: unreachable host, dropped connection.
    #[error("network error: {0}")]
    Network(String),
    /// The fixed request timeout expired before a response arrived.
    #[error("request timed out")]
    Timeout,
    /// The server rejected the request with an HTTP error status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// Structured message extracted from the response body, if any.
        detail: Option<String>,
    },
    /// The success body could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
    /// Networking was invoked outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status code, when the server produced a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's structured `detail` message, when present.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn api_url(path: &str) -> String {
    format!(
        "{}{path}",
        crate::util::config::API_BASE_URL.trim_end_matches('/')
    )
}

/// Extract the structured `detail` message from an error body, if any.
#[cfg(any(test, feature = "csr"))]
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_owned)
}

/// Whether `path` opts out of the global 401 session-expiry handling.
///
/// Login and register own their failure paths; a 401 from either must not
/// tear down a session that was never established.
#[cfg(any(test, feature = "csr"))]
fn bypasses_session_expiry(path: &str) -> bool {
    path == "/auth/login" || path == "/auth/register"
}

/// Serialize form fields as an `application/x-www-form-urlencoded` body.
#[cfg(any(test, feature = "csr"))]
fn encode_form(fields: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Append `pairs` to `path` as a query string; no pairs leaves `path` as is.
#[cfg(any(test, feature = "csr"))]
fn with_query(path: &str, pairs: &[(&'static str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    format!("{path}?{}", serializer.finish())
}

/// Attach `Authorization: Bearer <token>` when a token is stored.
///
/// The token is read at call time, never captured earlier, so a rotation
/// via login takes effect on the very next request.
#[cfg(feature = "csr")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match persist::stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Clear the persisted session and force navigation to the login view.
#[cfg(feature = "csr")]
fn expire_session() {
    log::warn!("received 401; clearing persisted session and redirecting to /login");
    persist::invalidate_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Send `request`, racing it against the fixed timeout, and apply the
/// inbound 401 interceptor. The 401 error still propagates to the caller
/// through the normal status path.
#[cfg(feature = "csr")]
async fn dispatch(
    path: &str,
    request: gloo_net::http::Request,
) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};
    use gloo_timers::future::TimeoutFuture;

    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    let response = match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
        Either::Right(_) => return Err(ApiError::Timeout),
    };

    if response.status() == 401 && !bypasses_session_expiry(path) {
        expire_session();
    }
    Ok(response)
}

#[cfg(feature = "csr")]
async fn into_json<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status,
            detail: extract_detail(&body),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET path`, decoding a JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = authorize(gloo_net::http::Request::get(&api_url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        into_json(dispatch(path, request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `GET path?query`, decoding a JSON body.
pub(crate) async fn get_json_query<T: DeserializeOwned>(
    path: &str,
    pairs: &[(&'static str, String)],
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = api_url(&with_query(path, pairs));
        let request = authorize(gloo_net::http::Request::get(&url))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        into_json(dispatch(path, request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, pairs);
        Err(ApiError::Unavailable)
    }
}

/// `POST path` with a JSON body, decoding a JSON response.
pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let request = authorize(gloo_net::http::Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        into_json(dispatch(path, request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `PUT path` with a JSON body, decoding a JSON response.
pub(crate) async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let request = authorize(gloo_net::http::Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        into_json(dispatch(path, request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE path`, ignoring any response body.
pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = authorize(gloo_net::http::Request::delete(&api_url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = dispatch(path, request).await?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                detail: extract_detail(&body),
            });
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST path` with form-encoded fields, decoding a JSON response.
///
/// Used only by the login exchange; the backend requires
/// `application/x-www-form-urlencoded` credentials there.
pub(crate) async fn post_form<T: DeserializeOwned>(
    path: &str,
    fields: &[(&str, &str)],
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = authorize(gloo_net::http::Request::post(&api_url(path)))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encode_form(fields))
            .map_err(|e| ApiError::Network(e.to_string()))?;
        into_json(dispatch(path, request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, fields);
        Err(ApiError::Unavailable)
    }
}
