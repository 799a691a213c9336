//! VPS detail page with power actions.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::gateway::Gateway;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PowerAction {
    Start,
    Stop,
    Restart,
}

#[component]
pub fn VpsDetailPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let params = use_params_map();
    let vps_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()).unwrap_or_default())
    });
    let server = LocalResource::new(move || api::vps::get(gateway, vps_id.get()));

    let run_action = move |action: PowerAction| {
        #[cfg(feature = "hydrate")]
        {
            let id = vps_id.get_untracked();
            leptos::task::spawn_local(async move {
                let result = match action {
                    PowerAction::Start => api::vps::start(gateway, id).await,
                    PowerAction::Stop => api::vps::stop(gateway, id).await,
                    PowerAction::Restart => api::vps::restart(gateway, id).await,
                };
                if result.is_ok() {
                    server.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = action;
        }
    };

    view! {
        <section class="vps-detail-page">
            <Suspense fallback=move || view! { <p>"Loading server..."</p> }>
                {move || {
                    server.get().map(|result| match result {
                        Ok(vps) => view! {
                            <div class="vps-detail-page__body">
                                <h1>{vps.name}</h1>
                                <p>{format!("node {} / vmid {}", vps.node_name, vps.vmid)}</p>
                                <p>{format!(
                                    "{} cores, {} MB, {} GB, {}",
                                    vps.cpu_cores, vps.memory, vps.disk_size, vps.os_template
                                )}</p>
                                <p class="vps-detail-page__status">{vps.status}</p>
                                <div class="vps-detail-page__actions">
                                    <button on:click=move |_| run_action(PowerAction::Start)>"Start"</button>
                                    <button on:click=move |_| run_action(PowerAction::Stop)>"Stop"</button>
                                    <button on:click=move |_| run_action(PowerAction::Restart)>"Restart"</button>
                                </div>
                            </div>
                        }
                            .into_any(),
                        Err(_) => view! { <p class="page-error">"Could not load this server."</p> }
                            .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
