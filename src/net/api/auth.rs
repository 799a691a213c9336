//! Authentication endpoints plus the sign-in/sign-out orchestration that
//! keeps the session store in step with the backend.

use leptos::prelude::*;

use crate::net::gateway::{ApiError, Gateway};
use crate::net::types::{ChangePassword, Token, User, UserCreate};
use crate::routes::LOGIN_PATH;

/// Exchange credentials for a bearer token. The endpoint speaks the OAuth2
/// password flow, so credentials travel as form fields rather than JSON.
pub async fn login(gateway: Gateway, username: &str, password: &str) -> Result<Token, ApiError> {
    gateway
        .post_form("/auth/login", &[("username", username), ("password", password)])
        .await
}

pub async fn register(gateway: Gateway, user: &UserCreate) -> Result<User, ApiError> {
    gateway.post("/auth/register", user).await
}

/// Profile of the token's owner.
pub async fn current_user(gateway: Gateway) -> Result<User, ApiError> {
    gateway.get("/auth/me").await
}

pub async fn change_password(gateway: Gateway, change: &ChangePassword) -> Result<User, ApiError> {
    gateway.post("/auth/change-password", change).await
}

/// Fetch the current profile and install it in the session store.
pub async fn refresh_profile(gateway: Gateway) -> Result<User, ApiError> {
    let user = current_user(gateway).await?;
    gateway.session().update(|session| session.set_user(user.clone()));
    Ok(user)
}

/// Full sign-in: obtain a token, store it so the follow-up request carries
/// the bearer header, then fetch and cache the profile.
pub async fn sign_in(gateway: Gateway, username: &str, password: &str) -> Result<User, ApiError> {
    let token = login(gateway, username, password).await?;
    gateway
        .session()
        .update(|session| session.set_token(&token.access_token));
    refresh_profile(gateway).await
}

/// Drop the session locally and return to the login page. No server call:
/// bearer tokens are stateless on the backend.
pub fn sign_out(gateway: Gateway) {
    gateway.session().update(|session| session.clear());
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = LOGIN_PATH;
    }
}
