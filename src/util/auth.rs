//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::state::store::SessionStore;

/// Whether an authenticated-only route should bounce to `/login`.
///
/// In-flight login attempts suppress the redirect so a slow exchange does
/// not flicker the user back to the form.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_loading && !state.is_authenticated
}

/// Redirect to `/login` whenever no authenticated session is present.
pub fn install_unauth_redirect<F>(session: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
