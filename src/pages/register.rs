//! Registration page creating a new identity.
//!
//! Registration never logs the user in; on success the page routes to the
//! login form so the new credentials are exercised immediately.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::state::store::SessionStore;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = SessionStore::expect();
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.is_loading() {
            return;
        }
        let request = RegisterRequest {
            email: email.get().trim().to_owned(),
            username: username.get().trim().to_owned(),
            password: password.get(),
            first_name: non_empty(first_name.get()),
            last_name: non_empty(last_name.get()),
        };
        if request.email.is_empty() || request.username.is_empty() || request.password.is_empty() {
            return;
        }
        let navigate = navigate.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if session.register(&request).await.is_ok() {
                navigate("/login", leptos_router::NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"finboard"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="First name (optional)"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Last name (optional)"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || session.is_loading()
                    >
                        "Register"
                    </button>
                </form>
                <Show when=move || session.error().is_some()>
                    <p class="login-message login-message--error">
                        {move || session.error().unwrap_or_default()}
                    </p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
