//! VPS creation form (operator route).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::gateway::Gateway;
use crate::net::types::VpsServerCreate;

#[component]
pub fn VpsCreatePage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let name = RwSignal::new(String::new());
    let node_name = RwSignal::new(String::new());
    let os_template = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = VpsServerCreate {
            name: name.get().trim().to_owned(),
            node_name: node_name.get().trim().to_owned(),
            cpu_cores: 1,
            memory: 1024,
            disk_size: 10,
            os_type: "linux".to_owned(),
            os_template: os_template.get().trim().to_owned(),
            bandwidth: 1000,
            notes: None,
            ip_allocation_id: None,
            ip_pool_id: None,
            config: None,
        };
        if request.name.is_empty() || request.node_name.is_empty() || request.os_template.is_empty()
        {
            info.set("Name, node, and template are required.".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::vps::create(gateway, &request).await {
                    Ok(vps) => navigate(&format!("/vps/{}", vps.id), NavigateOptions::default()),
                    Err(_) => busy.set(false),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate, gateway);
        }
    };

    view! {
        <section class="vps-create-page">
            <h1>"Create VPS"</h1>
            <form class="vps-create-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="node"
                    prop:value=move || node_name.get()
                    on:input=move |ev| node_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="template"
                    prop:value=move || os_template.get()
                    on:input=move |ev| os_template.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Create"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="page-error">{move || info.get()}</p>
            </Show>
        </section>
    }
}
