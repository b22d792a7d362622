//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components coordinate login redirects and
//! identity-dependent rendering through this record. Transitions are pure
//! methods so every invariant stays testable without a browser.
//!
//! DESIGN
//! ======
//! `is_authenticated` is stored rather than derived: only a successful login
//! (or a trusted restore of a previous login) sets it, so a profile written
//! by registration alone never counts as an authenticated session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Authentication state tracking the current user, credential, and the
/// progress of the most recent login or registration attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Profile of the current identity, if any.
    pub user: Option<User>,
    /// Opaque bearer credential from the last successful login.
    pub token: Option<String>,
    /// True only after a successful login set both `user` and `token`.
    pub is_authenticated: bool,
    /// True only while a login or register network exchange is outstanding.
    pub is_loading: bool,
    /// Message from the most recent failed operation.
    pub error: Option<String>,
}

/// The durable subset of [`SessionState`] written across reloads.
///
/// `is_loading` and `error` are transient and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

/// Flat, field-by-field partial update of the user profile.
///
/// Absent fields are left unchanged; the profile has no nested structure,
/// so no deep merge is needed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
    pub is_verified: Option<bool>,
}

impl SessionState {
    /// Start a login or registration attempt: mark loading, drop any stale
    /// error from a previous attempt.
    pub fn begin_attempt(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Adopt a freshly authenticated identity.
    pub fn complete_login(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
        self.is_loading = false;
        self.error = None;
    }

    /// Record a rejected or failed login attempt.
    pub fn fail_login(&mut self, message: String) {
        self.is_authenticated = false;
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Store the profile created by registration.
    ///
    /// Registration is not login: no token is issued and
    /// `is_authenticated` stays untouched.
    pub fn complete_registration(&mut self, user: User) {
        self.user = Some(user);
        self.is_loading = false;
        self.error = None;
    }

    /// Record a rejected or failed registration attempt.
    pub fn fail_registration(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Return to the empty unauthenticated state. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Adopt an identity restored from durable storage without a network
    /// round-trip (trust-on-read rehydration).
    pub fn restore(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
    }

    /// Merge `patch` into the current profile, field by field.
    ///
    /// Without a current user this is a silent no-op.
    pub fn merge_user(&mut self, patch: &UserPatch) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        if let Some(username) = &patch.username {
            user.username = username.clone();
        }
        if let Some(first_name) = &patch.first_name {
            user.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &patch.last_name {
            user.last_name = Some(last_name.clone());
        }
        if let Some(is_active) = patch.is_active {
            user.is_active = is_active;
        }
        if let Some(is_verified) = patch.is_verified {
            user.is_verified = is_verified;
        }
    }

    /// The durable subset written after every state-changing action.
    pub fn snapshot(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}
