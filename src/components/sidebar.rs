//! Navigation rail linking the authenticated sections.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"finboard"</div>
            <A href="/">"Dashboard"</A>
            <A href="/accounts">"Accounts"</A>
            <A href="/transactions">"Transactions"</A>
            <A href="/portfolios">"Portfolios"</A>
        </nav>
    }
}
