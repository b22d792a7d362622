//! Reactive session store provided through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single process-wide session lives behind this handle. All mutation
//! flows through its actions; views read reactively and re-render on
//! change. Login and register are async and deliberately unserialized —
//! for a single-user client session the last completion winning is
//! acceptable.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use crate::net;
use crate::net::http::ApiError;
use crate::net::types::{RegisterRequest, User};
use crate::state::persist::{self, RestoreDecision};
use crate::state::session::{SessionState, UserPatch};

/// Fallback message when a login rejection carries no structured detail.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback message when a registration rejection carries no structured detail.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Copyable handle to the process-wide session state.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Create the store, rehydrate it from durable storage, and register it
    /// in the reactive context for child components. Called once from the
    /// root component before the router renders.
    pub fn provide() -> Self {
        let store = Self::new();
        store.bootstrap();
        provide_context(store);
        store
    }

    /// Fetch the store from the reactive context.
    ///
    /// # Panics
    ///
    /// Panics when no ancestor called [`SessionStore::provide`].
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Snapshot of the current state. Reactive when called inside a
    /// tracking context.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Read a projection of the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.state.with(f)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    /// One-shot startup rehydration from durable storage.
    ///
    /// Trust-on-read: a well-formed persisted token and profile become an
    /// authenticated session without any network call. Partial or corrupt
    /// data has already been cleared by [`persist::load_session`].
    pub fn bootstrap(&self) {
        if let RestoreDecision::Restore { user, token } = persist::load_session() {
            self.state.update(|s| s.restore(user, token));
        }
    }

    /// Exchange credentials for a token, fetch the profile, and adopt the
    /// authenticated identity.
    ///
    /// # Errors
    ///
    /// Re-raises the underlying [`ApiError`] after recording a message in
    /// `error`, so the calling view can stay on the form.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<(), ApiError> {
        self.state.update(SessionState::begin_attempt);
        match exchange_credentials(identifier, secret).await {
            Ok((user, token)) => {
                self.state.update(|s| s.complete_login(user, token));
                self.state.with_untracked(persist::save_session);
                Ok(())
            }
            Err(err) => {
                // A token may already have been persisted before the
                // profile fetch failed; never leave it behind.
                persist::invalidate_session();
                self.state.update(|s| s.fail_login(login_error_message(&err)));
                Err(err)
            }
        }
    }

    /// Register a new identity. On success the profile is stored but the
    /// session stays unauthenticated — registration never issues a token.
    ///
    /// # Errors
    ///
    /// Re-raises the underlying [`ApiError`] after recording a message in
    /// `error`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        self.state.update(SessionState::begin_attempt);
        match net::auth::register(request).await {
            Ok(user) => {
                self.state.update(|s| s.complete_registration(user.clone()));
                self.state.with_untracked(persist::save_session);
                Ok(user)
            }
            Err(err) => {
                self.state
                    .update(|s| s.fail_registration(register_error_message(&err)));
                Err(err)
            }
        }
    }

    /// Drop the session and erase every persisted key. Idempotent.
    pub fn logout(&self) {
        persist::invalidate_session();
        self.state.update(SessionState::reset);
    }

    /// Merge `patch` into the current profile and re-persist. No-op
    /// without a user.
    pub fn update_user(&self, patch: &UserPatch) {
        self.state.update(|s| s.merge_user(patch));
        self.state.with_untracked(|s| {
            if s.user.is_some() {
                persist::save_session(s);
            }
        });
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.is_loading = loading);
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }
}

/// Token exchange followed by the profile fetch.
///
/// The outbound interceptor reads the stored token, so the fresh token is
/// persisted before the profile request goes out.
async fn exchange_credentials(identifier: &str, secret: &str) -> Result<(User, String), ApiError> {
    let grant = net::auth::login(identifier, secret).await?;
    persist::save_token(&grant.access_token);
    let user = net::auth::current_user().await?;
    Ok((user, grant.access_token))
}

fn login_error_message(err: &ApiError) -> String {
    err.detail().map_or_else(|| LOGIN_FAILED.to_owned(), str::to_owned)
}

fn register_error_message(err: &ApiError) -> String {
    err.detail()
        .map_or_else(|| REGISTRATION_FAILED.to_owned(), str::to_owned)
}
