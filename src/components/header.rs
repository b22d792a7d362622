//! Top bar showing the signed-in identity with a logout control.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::store::SessionStore;

/// Name shown in the header: the given name when present, else the username.
fn display_name(user: &User) -> String {
    user.first_name
        .clone()
        .unwrap_or_else(|| user.username.clone())
}

#[component]
pub fn Header() -> impl IntoView {
    let session = SessionStore::expect();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="header">
            <span class="header__user">
                {move || session.user().map(|u| display_name(&u)).unwrap_or_default()}
            </span>
            <button class="header__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
