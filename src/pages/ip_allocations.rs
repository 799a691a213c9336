//! IP allocation list (operator route).

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;

#[component]
pub fn IpAllocationsPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let allocations = LocalResource::new(move || api::ip_allocations::list(gateway, None, None));

    view! {
        <section class="allocations-page">
            <h1>"IP Allocations"</h1>
            <Suspense fallback=move || view! { <p>"Loading allocations..."</p> }>
                {move || {
                    allocations.get().map(|result| match result {
                        Ok(list) => view! {
                            <ul class="allocations-page__list">
                                {list
                                    .into_iter()
                                    .map(|allocation| {
                                        view! {
                                            <li>
                                                <span>{allocation.ip_address}</span>
                                                <span>{format!("{:?}", allocation.status)}</span>
                                                <span>{allocation.hostname.unwrap_or_default()}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any(),
                        Err(_) => view! { <p class="page-error">"Could not load allocations."</p> }
                            .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
