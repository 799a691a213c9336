//! VPS server list with links into detail pages.

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::state::session::SessionStore;

#[component]
pub fn VpsListPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let servers = LocalResource::new(move || api::vps::list(gateway, 0, 100));
    let can_create = move || session.with(SessionStore::is_operator);

    view! {
        <section class="vps-page">
            <header class="vps-page__header">
                <h1>"VPS Servers"</h1>
                <Show when=can_create>
                    <a class="btn btn--primary" href="/vps/create">"+ New VPS"</a>
                </Show>
            </header>
            <Suspense fallback=move || view! { <p>"Loading servers..."</p> }>
                {move || {
                    servers.get().map(|result| match result {
                        Ok(list) => view! {
                            <ul class="vps-page__list">
                                {list
                                    .into_iter()
                                    .map(|vps| {
                                        let href = format!("/vps/{}", vps.id);
                                        view! {
                                            <li>
                                                <a href=href>{vps.name}</a>
                                                <span>{vps.status}</span>
                                                <span>{vps.ip_address.unwrap_or_default()}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any(),
                        Err(_) => view! { <p class="page-error">"Could not load servers."</p> }
                            .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
