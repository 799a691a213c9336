//! Fallback page for unmatched routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"Page not found"</h1>
            <a href="/">"Back to the control panel"</a>
        </section>
    }
}
