//! User management list (admin route).

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;

#[component]
pub fn UsersPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let users = LocalResource::new(move || api::users::list(gateway, 0, 100));

    view! {
        <section class="users-page">
            <h1>"Users"</h1>
            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users.get().map(|result| match result {
                        Ok(list) => view! {
                            <ul class="users-page__list">
                                {list
                                    .into_iter()
                                    .map(|user| {
                                        view! {
                                            <li>
                                                <span>{user.username}</span>
                                                <span>{user.email}</span>
                                                <span>{format!("{:?}", user.role)}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any(),
                        Err(_) => view! { <p class="page-error">"Could not load users."</p> }
                            .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
