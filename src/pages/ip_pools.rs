//! IP pool list (operator route).

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;

#[component]
pub fn IpPoolsPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let pools = LocalResource::new(move || api::ip_pools::list(gateway, 0, 100));

    view! {
        <section class="ippools-page">
            <h1>"IP Pools"</h1>
            <Suspense fallback=move || view! { <p>"Loading pools..."</p> }>
                {move || {
                    pools.get().map(|result| match result {
                        Ok(list) => view! {
                            <ul class="ippools-page__list">
                                {list
                                    .into_iter()
                                    .map(|pool| {
                                        view! {
                                            <li>
                                                <span>{pool.name}</span>
                                                <span>{pool.network}</span>
                                                <span>{if pool.is_active { "active" } else { "inactive" }}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any(),
                        Err(_) => view! { <p class="page-error">"Could not load IP pools."</p> }
                            .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
