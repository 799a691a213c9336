//! Login page: username + password form for the OAuth2 password flow.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::gateway::Gateway;
use crate::routes;

/// Sign-in form. On success navigates to the `redirect` query target the
/// guard attached, or the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let search = use_location().search;
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            info.set("Enter username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());
        let target = routes::redirect_target(&search.get_untracked());

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::auth::sign_in(gateway, &username_value, &password_value).await
                {
                    Ok(_) => navigate(&target, NavigateOptions::default()),
                    Err(error) => {
                        info.set(error.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, target, &navigate, gateway);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Hostpanel"</h1>
                <p class="login-card__subtitle">"VPS and IP pool management"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
