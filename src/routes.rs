//! Route table and navigation guard.
//!
//! DESIGN
//! ======
//! Every navigable path carries a static requirement triple (auth / admin /
//! operator). Requirements compose by OR along the matched ancestor chain,
//! so children of the authenticated layout inherit `requires_auth` without
//! restating it. The guard decision is a pure function over the requested
//! path and the session store; `app::App` wires it to the router.
//!
//! The check order is a contract: an unauthenticated user asking for an
//! admin-only page is sent to login (with a return target), never to the
//! dashboard.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::storage::SnapshotStore;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/";

/// Static capability requirements declared on a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    pub requires_auth: bool,
    pub requires_admin: bool,
    pub requires_operator: bool,
}

impl RouteRequirement {
    const NONE: Self = Self { requires_auth: false, requires_admin: false, requires_operator: false };
    const AUTH: Self = Self { requires_auth: true, requires_admin: false, requires_operator: false };
    const ADMIN: Self = Self { requires_auth: false, requires_admin: true, requires_operator: false };
    const OPERATOR: Self = Self { requires_auth: false, requires_admin: false, requires_operator: true };

    fn merge(self, other: Self) -> Self {
        Self {
            requires_auth: self.requires_auth || other.requires_auth,
            requires_admin: self.requires_admin || other.requires_admin,
            requires_operator: self.requires_operator || other.requires_operator,
        }
    }
}

/// One node in the static route tree. `pattern` is a slash-joined segment
/// list; a `:name` segment matches any single segment and an empty pattern
/// consumes nothing (index routes, layout roots).
struct RouteNode {
    pattern: &'static str,
    requirement: RouteRequirement,
    children: &'static [RouteNode],
}

/// Mirrors the served route table. `vps/create` precedes `vps/:id` because
/// matching is first-win within a sibling list.
static ROUTE_TREE: &[RouteNode] = &[
    RouteNode { pattern: "login", requirement: RouteRequirement::NONE, children: &[] },
    RouteNode {
        pattern: "",
        requirement: RouteRequirement::AUTH,
        children: &[
            RouteNode { pattern: "", requirement: RouteRequirement::NONE, children: &[] },
            RouteNode { pattern: "users", requirement: RouteRequirement::ADMIN, children: &[] },
            RouteNode { pattern: "ippools", requirement: RouteRequirement::OPERATOR, children: &[] },
            RouteNode {
                pattern: "ip-allocations",
                requirement: RouteRequirement::OPERATOR,
                children: &[],
            },
            RouteNode { pattern: "vps", requirement: RouteRequirement::NONE, children: &[] },
            RouteNode { pattern: "vps/create", requirement: RouteRequirement::OPERATOR, children: &[] },
            RouteNode { pattern: "vps/:id", requirement: RouteRequirement::NONE, children: &[] },
            RouteNode { pattern: "profile", requirement: RouteRequirement::NONE, children: &[] },
        ],
    },
];

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_nodes(
    nodes: &[RouteNode],
    segments: &[&str],
    inherited: RouteRequirement,
) -> Option<RouteRequirement> {
    for node in nodes {
        let pattern: Vec<&str> = split_segments(node.pattern);
        if segments.len() < pattern.len() {
            continue;
        }
        let (head, rest) = segments.split_at(pattern.len());
        let matches = pattern
            .iter()
            .zip(head)
            .all(|(p, s)| p.starts_with(':') || p == s);
        if !matches {
            continue;
        }
        let merged = inherited.merge(node.requirement);
        if node.children.is_empty() {
            if rest.is_empty() {
                return Some(merged);
            }
            continue;
        }
        if let Some(found) = match_nodes(node.children, rest, merged) {
            return Some(found);
        }
    }
    None
}

/// Composed requirements for `path`. Unmatched paths (the not-found page)
/// carry no requirements.
pub fn requirement_for(path: &str) -> RouteRequirement {
    match_nodes(ROUTE_TREE, &split_segments(path), RouteRequirement::NONE).unwrap_or_default()
}

/// Outcome of one route transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Redirect to login, keeping the originally requested path as the
    /// post-login return target.
    ToLogin { redirect: String },
    /// Redirect to the default landing page.
    ToDashboard,
}

/// Decide a transition to `path`. Checks short-circuit in contract order:
/// auth, admin, operator, login-while-authenticated, allow.
pub fn decide<S: SnapshotStore>(path: &str, session: &SessionStore<S>) -> GuardDecision {
    let requirement = requirement_for(path);
    let authenticated = session.is_authenticated();

    if requirement.requires_auth && !authenticated {
        return GuardDecision::ToLogin { redirect: path.to_owned() };
    }
    if requirement.requires_admin && !session.has_at_least(Role::Admin) {
        return GuardDecision::ToDashboard;
    }
    if requirement.requires_operator && !session.has_at_least(Role::Operator) {
        return GuardDecision::ToDashboard;
    }
    if split_segments(path) == ["login"] && authenticated {
        return GuardDecision::ToDashboard;
    }
    GuardDecision::Allow
}

/// Recombine a pathname with its query string so the login redirect keeps
/// the full originally requested URL, not just the path.
pub fn path_with_query(path: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() { path.to_owned() } else { format!("{path}?{query}") }
}

/// Login URL carrying `target` as a `redirect` query parameter.
pub fn login_redirect_url(target: &str) -> String {
    format!("{LOGIN_PATH}?redirect={}", encode_component(target))
}

/// Return target from a login page query string (`?redirect=...`), decoded.
/// Falls back to the dashboard when absent or empty.
pub fn redirect_target(query: &str) -> String {
    let raw = query.trim_start_matches('?');
    let target = raw
        .split('&')
        .find_map(|pair| pair.strip_prefix("redirect="))
        .map(decode_component)
        .unwrap_or_default();
    if target.is_empty() { DASHBOARD_PATH.to_owned() } else { target }
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(hex) = raw.get(i + 1..i + 3)
            && let Ok(byte) = u8::from_str_radix(hex, 16)
        {
            out.push(byte);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
