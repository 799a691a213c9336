use super::*;
use crate::net::types::User;
use crate::util::storage::MemoryStorage;

fn session_with(role: Role, is_superuser: bool) -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::restore(MemoryStorage::new());
    store.set_session(
        "tok-1",
        User {
            id: 1,
            username: "u".to_owned(),
            email: "u@example.com".to_owned(),
            first_name: None,
            last_name: None,
            role,
            is_active: true,
            is_superuser,
            created_at: "2024-01-01T00:00:00Z".to_owned(),
            updated_at: "2024-01-01T00:00:00Z".to_owned(),
        },
    );
    store
}

fn anonymous() -> SessionStore<MemoryStorage> {
    SessionStore::restore(MemoryStorage::new())
}

// =============================================================
// Requirement composition
// =============================================================

#[test]
fn login_route_is_public() {
    assert_eq!(requirement_for("/login"), RouteRequirement::default());
}

#[test]
fn dashboard_inherits_auth_from_layout() {
    let req = requirement_for("/");
    assert!(req.requires_auth);
    assert!(!req.requires_admin);
    assert!(!req.requires_operator);
}

#[test]
fn users_route_composes_auth_and_admin() {
    let req = requirement_for("/users");
    assert!(req.requires_auth);
    assert!(req.requires_admin);
}

#[test]
fn ippool_routes_compose_auth_and_operator() {
    for path in ["/ippools", "/ip-allocations", "/vps/create"] {
        let req = requirement_for(path);
        assert!(req.requires_auth, "{path}");
        assert!(req.requires_operator, "{path}");
        assert!(!req.requires_admin, "{path}");
    }
}

#[test]
fn vps_detail_matches_param_segment() {
    let req = requirement_for("/vps/42");
    assert!(req.requires_auth);
    assert!(!req.requires_operator);
}

#[test]
fn vps_create_wins_over_param_route() {
    assert!(requirement_for("/vps/create").requires_operator);
}

#[test]
fn unknown_path_has_no_requirements() {
    assert_eq!(requirement_for("/no/such/page"), RouteRequirement::default());
}

// =============================================================
// Guard decision ordering (contract)
// =============================================================

#[test]
fn unauthenticated_protected_route_goes_to_login_with_target() {
    let decision = decide("/vps", &anonymous());
    assert_eq!(decision, GuardDecision::ToLogin { redirect: "/vps".to_owned() });
}

#[test]
fn unauthenticated_admin_route_goes_to_login_not_dashboard() {
    let decision = decide("/users", &anonymous());
    assert_eq!(decision, GuardDecision::ToLogin { redirect: "/users".to_owned() });
}

#[test]
fn operator_on_admin_route_goes_to_dashboard() {
    let session = session_with(Role::Operator, false);
    assert_eq!(decide("/users", &session), GuardDecision::ToDashboard);
}

#[test]
fn plain_user_on_operator_route_goes_to_dashboard() {
    let session = session_with(Role::User, false);
    assert_eq!(decide("/ippools", &session), GuardDecision::ToDashboard);
}

#[test]
fn operator_on_operator_route_is_allowed() {
    let session = session_with(Role::Operator, false);
    assert_eq!(decide("/ippools", &session), GuardDecision::Allow);
}

#[test]
fn admin_satisfies_operator_requirement() {
    let session = session_with(Role::Admin, false);
    assert_eq!(decide("/vps/create", &session), GuardDecision::Allow);
}

#[test]
fn superuser_flag_opens_admin_routes() {
    let session = session_with(Role::User, true);
    assert_eq!(decide("/users", &session), GuardDecision::Allow);
}

#[test]
fn authenticated_login_visit_goes_to_dashboard() {
    let session = session_with(Role::User, false);
    assert_eq!(decide("/login", &session), GuardDecision::ToDashboard);
}

#[test]
fn anonymous_login_visit_is_allowed() {
    assert_eq!(decide("/login", &anonymous()), GuardDecision::Allow);
}

#[test]
fn unknown_path_is_allowed_for_anyone() {
    assert_eq!(decide("/missing", &anonymous()), GuardDecision::Allow);
}

#[test]
fn plain_user_can_open_vps_routes() {
    let session = session_with(Role::User, false);
    assert_eq!(decide("/vps", &session), GuardDecision::Allow);
    assert_eq!(decide("/vps/7", &session), GuardDecision::Allow);
}

// =============================================================
// Login redirect plumbing
// =============================================================

#[test]
fn login_redirect_url_keeps_plain_paths_readable() {
    assert_eq!(login_redirect_url("/vps/42"), "/login?redirect=/vps/42");
}

#[test]
fn login_redirect_url_escapes_query_characters() {
    assert_eq!(
        login_redirect_url("/vps?page=2&sort=name"),
        "/login?redirect=/vps%3Fpage%3D2%26sort%3Dname"
    );
}

#[test]
fn redirect_target_round_trips_through_the_url() {
    let url = login_redirect_url("/vps?page=2");
    let query = url.split_once('?').unwrap().1;
    assert_eq!(redirect_target(query), "/vps?page=2");
}

#[test]
fn path_with_query_recombines_location_parts() {
    assert_eq!(path_with_query("/vps", "page=2&sort=name"), "/vps?page=2&sort=name");
    assert_eq!(path_with_query("/vps", "?page=2"), "/vps?page=2");
    assert_eq!(path_with_query("/vps", ""), "/vps");
}

#[test]
fn denied_url_query_survives_the_login_round_trip() {
    let target = path_with_query("/vps", "page=2&sort=name");
    let url = login_redirect_url(&target);
    let query = url.split_once('?').unwrap().1;
    assert_eq!(redirect_target(query), "/vps?page=2&sort=name");
}

#[test]
fn redirect_target_defaults_to_dashboard() {
    assert_eq!(redirect_target(""), DASHBOARD_PATH);
    assert_eq!(redirect_target("?other=1"), DASHBOARD_PATH);
    assert_eq!(redirect_target("?redirect="), DASHBOARD_PATH);
}
