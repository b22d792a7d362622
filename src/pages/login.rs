//! Login page exchanging email + password for a session.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::store::SessionStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = SessionStore::expect();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.is_loading() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }
        let navigate = navigate.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            // On failure the store records `error`; stay on the form.
            if session.login(&email_value, &password_value).await.is_ok() {
                navigate("/", leptos_router::NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"finboard"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
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
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || session.is_loading()
                    >
                        "Sign In"
                    </button>
                </form>
                <Show when=move || session.error().is_some()>
                    <p class="login-message login-message--error">
                        {move || session.error().unwrap_or_default()}
                    </p>
                </Show>
                <p class="login-card__footer">
                    "No account yet? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
