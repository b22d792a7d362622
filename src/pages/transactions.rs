//! Transactions page listing recent ledger activity.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::Shell;
use crate::net::types::TransactionFilter;
use crate::state::store::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// How many transactions the page requests per load.
const PAGE_SIZE: u32 = 50;

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let session = SessionStore::expect();
    install_unauth_redirect(session, use_navigate());

    let transactions = LocalResource::new(|| async move {
        let filter = TransactionFilter {
            limit: Some(PAGE_SIZE),
            ..TransactionFilter::default()
        };
        crate::net::transactions::list(&filter).await
    });

    view! {
        <Shell>
            <div class="transactions-page">
                <h1>"Transactions"</h1>
                <Suspense fallback=move || view! { <p>"Loading transactions..."</p> }>
                    {move || {
                        transactions.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No transactions yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="transactions-page__list">
                                        {list
                                            .into_iter()
                                            .map(|tx| {
                                                view! {
                                                    <li class="transactions-page__row">
                                                        <span class="transactions-page__date">
                                                            {tx.date}
                                                        </span>
                                                        <span>{tx.description}</span>
                                                        <span>
                                                            {format!("{:.2} {}", tx.amount, tx.currency)}
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
                                    <p class="transactions-page__error">
                                        {format!("Failed to load transactions: {e}")}
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
