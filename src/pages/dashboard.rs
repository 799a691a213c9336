//! Landing page: section navigation scoped to the session's role.

use leptos::prelude::*;

use crate::net::api::auth;
use crate::net::gateway::Gateway;
use crate::state::app::AppState;
use crate::state::session::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let app = expect_context::<RwSignal<AppState>>();

    let username =
        move || session.with(|s| s.user().map(|u| u.username.clone()).unwrap_or_default());
    let show_admin = move || session.with(SessionStore::is_admin);
    let show_operator = move || session.with(SessionStore::is_operator);

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Control Panel"</h1>
                <span class="dashboard-page__user">{username}</span>
                <button class="btn" on:click=move |_| auth::sign_out(gateway)>
                    "Sign out"
                </button>
            </header>
            <Show when=move || app.with(AppState::is_loading)>
                <p class="dashboard-page__loading">"Loading..."</p>
            </Show>
            <nav class="dashboard-page__nav">
                <a href="/vps">"VPS Servers"</a>
                <a href="/profile">"Profile"</a>
                <Show when=show_operator>
                    <a href="/ippools">"IP Pools"</a>
                    <a href="/ip-allocations">"IP Allocations"</a>
                </Show>
                <Show when=show_admin>
                    <a href="/users">"Users"</a>
                </Show>
            </nav>
        </section>
    }
}
