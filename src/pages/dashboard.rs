//! Dashboard page summarizing balances across accounts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::Shell;
use crate::state::store::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = SessionStore::expect();
    install_unauth_redirect(session, use_navigate());

    let overview = LocalResource::new(|| crate::net::balances::overview());

    view! {
        <Shell>
            <div class="dashboard-page">
                <h1>"Dashboard"</h1>
                <Suspense fallback=move || view! { <p>"Loading balances..."</p> }>
                    {move || {
                        overview.get().map(|result| match result {
                            Ok(report) => {
                                view! {
                                    <div class="dashboard-page__totals">
                                        <div class="stat">
                                            <span class="stat__label">"Total balance"</span>
                                            <span class="stat__value">
                                                {format!("{:.2} {}", report.total_balance, report.currency)}
                                            </span>
                                        </div>
                                        <div class="stat">
                                            <span class="stat__label">"Available"</span>
                                            <span class="stat__value">
                                                {format!(
                                                    "{:.2} {}",
                                                    report.total_available_balance,
                                                    report.currency,
                                                )}
                                            </span>
                                        </div>
                                    </div>
                                    <ul class="dashboard-page__accounts">
                                        {report
                                            .accounts
                                            .into_iter()
                                            .map(|account| {
                                                view! {
                                                    <li class="dashboard-page__account">
                                                        <span>{account.account_name}</span>
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
                                    <p class="dashboard-page__error">
                                        {format!("Failed to load balances: {e}")}
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
