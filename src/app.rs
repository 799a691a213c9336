//! Root application component: shared state contexts, routing, and the
//! navigation guard that enforces route requirements on every transition.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::net::gateway::Gateway;
use crate::pages::{
    dashboard::DashboardPage, ip_allocations::IpAllocationsPage, ip_pools::IpPoolsPage,
    login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, users::UsersPage,
    vps_create::VpsCreatePage, vps_detail::VpsDetailPage, vps_list::VpsListPage,
};
use crate::routes::{self, GuardDecision};
use crate::state::app::{AppState, NoticeLevel};
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component. Owns the session store (seeded from the storage snapshot
/// once at startup) and the app state, and hands both plus the gateway to
/// the rest of the tree via context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::restore(BrowserStorage));
    let app = RwSignal::new(AppState::default());
    let gateway = Gateway::new(session, app);

    provide_context(session);
    provide_context(app);
    provide_context(gateway);

    view! {
        <Stylesheet id="leptos" href="/pkg/hostpanel-console.css"/>
        <Title text="Hostpanel"/>

        <Router>
            <RouteGuard/>
            <NoticeTray/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("ippools") view=IpPoolsPage/>
                    <Route path=StaticSegment("ip-allocations") view=IpAllocationsPage/>
                    <Route path=StaticSegment("vps") view=VpsListPage/>
                    <Route path=(StaticSegment("vps"), StaticSegment("create")) view=VpsCreatePage/>
                    <Route path=(StaticSegment("vps"), ParamSegment("id")) view=VpsDetailPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Re-runs the guard decision on every route transition (and on session
/// changes, so a mid-session logout immediately kicks the user out of
/// protected pages).
#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let navigate = use_navigate();

    Effect::new(move || {
        let path = pathname.get();
        match session.with(|s| routes::decide(&path, s)) {
            GuardDecision::Allow => {}
            GuardDecision::ToLogin { redirect } => {
                // Keep the query string of the denied URL in the return target.
                let target = routes::path_with_query(&redirect, &search.get_untracked());
                navigate(&routes::login_redirect_url(&target), NavigateOptions::default());
            }
            GuardDecision::ToDashboard => {
                navigate(routes::DASHBOARD_PATH, NavigateOptions::default());
            }
        }
    });
}

/// Toast list fed by the gateway's failure dispatcher and page-level
/// notices.
#[component]
fn NoticeTray() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    view! {
        <div class="notice-tray">
            {move || {
                app.with(|state| {
                    state
                        .notifications()
                        .iter()
                        .map(|notice| {
                            let id = notice.id;
                            let class = match notice.level {
                                NoticeLevel::Info => "notice notice--info",
                                NoticeLevel::Success => "notice notice--success",
                                NoticeLevel::Error => "notice notice--error",
                            };
                            let message = notice.message.clone();
                            view! {
                                <div class=class>
                                    <span>{message}</span>
                                    <button on:click=move |_| {
                                        app.update(|state| state.dismiss(id));
                                    }>"x"</button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}
