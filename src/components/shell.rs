//! Authenticated page chrome: navigation rail and header around content.

use leptos::prelude::*;

use super::header::Header;
use super::sidebar::Sidebar;

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar/>
            <div class="shell__main">
                <Header/>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
