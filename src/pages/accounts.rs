//! Accounts page listing the user's financial accounts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::Shell;
use crate::state::store::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AccountsPage() -> impl IntoView {
    let session = SessionStore::expect();
    install_unauth_redirect(session, use_navigate());

    let accounts = LocalResource::new(|| crate::net::accounts::list());

    view! {
        <Shell>
            <div class="accounts-page">
                <h1>"Accounts"</h1>
                <Suspense fallback=move || view! { <p>"Loading accounts..."</p> }>
                    {move || {
                        accounts.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No accounts yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="accounts-page__list">
                                        {list
                                            .into_iter()
                                            .map(|account| {
                                                view! {
                                                    <li class="accounts-page__row">
                                                        <span>{account.name}</span>
                                                        <span class="accounts-page__kind">
                                                            {account.account_type}
                                                        </span>
                                                        <span>
                                                            {format!(
                                                                "{:.2} {}",
                                                                account.current_balance,
                                                                account.currency,
                                                            )}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="accounts-page__error">
                                        {format!("Failed to load accounts: {e}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>
        </Shell>
    }
}
