//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    accounts::AccountsPage, dashboard::DashboardPage, login::LoginPage,
    portfolios::PortfoliosPage, register::RegisterPage, transactions::TransactionsPage,
};
use crate::state::store::SessionStore;

/// Root application component.
///
/// Rehydrates the session from durable storage before the router renders,
/// then provides the store context and the client-side routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session bootstrap runs exactly once, before the first route renders.
    SessionStore::provide();

    view! {
        <Title text="finboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("accounts") view=AccountsPage/>
                <Route path=StaticSegment("transactions") view=TransactionsPage/>
                <Route path=StaticSegment("portfolios") view=PortfoliosPage/>
            </Routes>
        </Router>
    }
}
