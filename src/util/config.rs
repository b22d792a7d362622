//! Compile-time client configuration.

/// Backend origin for all REST calls.
///
/// Configured at build time via the `API_BASE_URL` environment variable;
/// defaults to the local development backend.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};
