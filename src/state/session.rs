//! Auth-session state: bearer token plus cached user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the single writer of session state. The HTTP gateway reads
//! the token from it and clears it on a 401; the navigation guard reads the
//! role predicates. Every mutation persists a snapshot so a page reload
//! restores the signed-in state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};
use crate::util::storage::{BrowserStorage, SnapshotStore};

const TOKEN_KEY: &str = "access_token";
const USER_KEY: &str = "user_info";

/// Current session: an opaque bearer token (empty = unauthenticated) and the
/// profile fetched after login. The profile is only meaningful while the
/// token is non-empty.
#[derive(Clone, Debug)]
pub struct SessionStore<S: SnapshotStore = BrowserStorage> {
    token: String,
    user: Option<User>,
    storage: S,
}

impl<S: SnapshotStore> SessionStore<S> {
    /// Seed the store from the snapshot written by a previous session, or
    /// start empty. A stored profile without a token is ignored.
    pub fn restore(storage: S) -> Self {
        let token = storage.read(TOKEN_KEY).unwrap_or_default();
        let user = if token.is_empty() {
            None
        } else {
            storage
                .read(USER_KEY)
                .and_then(|raw| serde_json::from_str(&raw).ok())
        };
        Self { token, user, storage }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// True when the current role dominates `required`, or the profile
    /// carries the superuser flag (which dominates everything).
    pub fn has_at_least(&self, required: Role) -> bool {
        match &self.user {
            Some(user) => user.is_superuser || user.role >= required,
            None => false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.has_at_least(Role::Admin)
    }

    pub fn is_operator(&self) -> bool {
        self.has_at_least(Role::Operator)
    }

    /// Store the token issued by the login endpoint. The profile is fetched
    /// separately and installed with [`Self::set_user`].
    pub fn set_token(&mut self, token: &str) {
        self.token = token.to_owned();
        self.storage.write(TOKEN_KEY, token);
    }

    pub fn set_user(&mut self, user: User) {
        if let Ok(raw) = serde_json::to_string(&user) {
            self.storage.write(USER_KEY, &raw);
        }
        self.user = Some(user);
    }

    pub fn set_session(&mut self, token: &str, user: User) {
        self.set_token(token);
        self.set_user(user);
    }

    /// Drop token and profile together and remove the snapshot. Safe to call
    /// on an already-empty session; concurrent 401 handlers may race here.
    pub fn clear(&mut self) {
        self.token.clear();
        self.user = None;
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
