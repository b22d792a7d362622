//! Durable persistence of the session snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store writes here after every state-changing action, and the
//! HTTP layer's 401 interceptor clears through here when the backend expires
//! a session mid-flight. [`invalidate_session`] is the single clearing
//! primitive both paths share.
//!
//! ERROR HANDLING
//! ==============
//! Malformed or partial persisted data is discarded silently; the worst
//! outcome of a corrupt localStorage entry is starting logged out.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use crate::net::types::User;
use crate::state::session::SessionState;
use crate::util::storage;

/// localStorage key holding the raw bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// localStorage key holding the serialized user profile.
pub const USER_KEY: &str = "user";
/// localStorage key holding the aggregate persisted snapshot.
pub const SESSION_KEY: &str = "finboard-session";

/// Outcome of reading the persisted session at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum RestoreDecision {
    /// Both keys were present and the profile parsed; adopt the identity.
    Restore { user: User, token: String },
    /// Partial or corrupt data; every key must be removed.
    Discard,
    /// Nothing persisted.
    Empty,
}

/// Classify the raw persisted values. Pure, so all three outcomes are
/// covered natively in tests.
pub fn resolve_restore(token: Option<String>, user_json: Option<String>) -> RestoreDecision {
    match (token, user_json) {
        (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
            Ok(user) => RestoreDecision::Restore { user, token },
            Err(_) => RestoreDecision::Discard,
        },
        (None, None) => RestoreDecision::Empty,
        _ => RestoreDecision::Discard,
    }
}

/// Read the persisted identity, removing partial or corrupt leftovers.
pub fn load_session() -> RestoreDecision {
    let decision = resolve_restore(storage::get_raw(ACCESS_TOKEN_KEY), storage::get_raw(USER_KEY));
    if decision == RestoreDecision::Discard {
        #[cfg(feature = "csr")]
        log::warn!("discarding partial or corrupt persisted session data");
        invalidate_session();
    }
    decision
}

/// The bearer token the outbound interceptor attaches, read at call time.
pub fn stored_token() -> Option<String> {
    storage::get_raw(ACCESS_TOKEN_KEY)
}

/// Write the token immediately after a successful credential exchange, so
/// the very next request carries it.
pub fn save_token(token: &str) {
    storage::set_raw(ACCESS_TOKEN_KEY, token);
}

/// Serialize the durable subset of `state` after a mutating store action.
pub fn save_session(state: &SessionState) {
    let snapshot = state.snapshot();
    if let Some(token) = &snapshot.token {
        storage::set_raw(ACCESS_TOKEN_KEY, token);
    }
    if let Some(user) = &snapshot.user {
        storage::save_json(USER_KEY, user);
    }
    storage::save_json(SESSION_KEY, &snapshot);
}

/// Remove every persisted session key.
///
/// Shared by `logout`, the 401 interceptor, and the malformed-bootstrap
/// path; idempotent.
pub fn invalidate_session() {
    storage::remove(ACCESS_TOKEN_KEY);
    storage::remove(USER_KEY);
    storage::remove(SESSION_KEY);
}
