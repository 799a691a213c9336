//! Current-user profile view.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let profile = move || {
        session.with(|s| {
            s.user().map(|user| {
                (
                    user.username.clone(),
                    user.email.clone(),
                    format!("{:?}", user.role),
                    user.is_superuser,
                )
            })
        })
    };

    view! {
        <section class="profile-page">
            <h1>"Profile"</h1>
            {move || {
                profile().map(|(username, email, role, is_superuser)| {
                    view! {
                        <dl class="profile-page__fields">
                            <dt>"Username"</dt>
                            <dd>{username}</dd>
                            <dt>"Email"</dt>
                            <dd>{email}</dd>
                            <dt>"Role"</dt>
                            <dd>{role}{if is_superuser { " (superuser)" } else { "" }}</dd>
                        </dl>
                    }
                })
            }}
        </section>
    }
}
