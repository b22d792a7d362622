//! Portfolios page listing investment portfolios.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::Shell;
use crate::state::store::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn PortfoliosPage() -> impl IntoView {
    let session = SessionStore::expect();
    install_unauth_redirect(session, use_navigate());

    let portfolios = LocalResource::new(|| crate::net::portfolios::list());

    view! {
        <Shell>
            <div class="portfolios-page">
                <h1>"Portfolios"</h1>
                <Suspense fallback=move || view! { <p>"Loading portfolios..."</p> }>
                    {move || {
                        portfolios.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No portfolios yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="portfolios-page__list">
                                        {list
                                            .into_iter()
                                            .map(|portfolio| {
                                                view! {
                                                    <li class="portfolios-page__row">
                                                        <span>{portfolio.name}</span>
                                                        <span>
                                                            {format!(
                                                                "{:.2} {}",
                                                                portfolio.total_value,
                                                                portfolio.currency,
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
                                    <p class="portfolios-page__error">
                                        {format!("Failed to load portfolios: {e}")}
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
