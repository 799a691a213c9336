//! Single HTTP chokepoint for all management-API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound request passes through [`Gateway`]: it attaches the bearer
//! token from the session store, balances the request-in-flight counter, and
//! classifies every failure into one [`ApiError`] bucket. Classification is
//! an ordered, total match; a 401 is the only outcome that mutates session
//! state (clear + forced navigation to `/login`).
//!
//! ERROR HANDLING
//! ==============
//! Failures are dispatched as global side effects (notification, logout) and
//! still returned to the caller, so pages can add local handling such as
//! form-field errors on top of the toast.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::routes::LOGIN_PATH;
use crate::state::app::AppState;
use crate::state::session::SessionStore;
use crate::util::storage::SnapshotStore;

/// Base path for the management API, same-origin.
pub const API_BASE: &str = "/api/v1";

const MSG_SERVER: &str = "Server error, please try again later";
const MSG_REQUEST_FAILED: &str = "Request failed";

/// Outcome taxonomy for a failed request. Each response or transport error
/// maps to exactly one variant; see [`classify`]. The `Display` text doubles
/// as the user-visible notification for every bucket except `Server`, which
/// notifies generically.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No response reached the client at all.
    #[error("Network error, please check your connection")]
    Network,
    /// 401: the session is no longer valid.
    #[error("Session expired, please sign in again")]
    Unauthorized,
    /// Any 5xx status.
    #[error("server error ({status})")]
    Server { status: u16 },
    /// Any other error status, carrying the backend `detail` when present.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The 2xx body did not decode into the expected type.
    #[error("unexpected response from server")]
    Decode,
}

/// Map a finished request onto the failure taxonomy. `status` is `None` when
/// no response arrived. The arm order is a contract: 401 precedes the 5xx
/// check, which precedes the client-error fallback.
pub fn classify(status: Option<u16>, detail: Option<String>) -> ApiError {
    match status {
        None => ApiError::Network,
        Some(401) => ApiError::Unauthorized,
        Some(status) if status >= 500 => ApiError::Server { status },
        Some(status) => ApiError::Api {
            status,
            message: detail.unwrap_or_else(|| MSG_REQUEST_FAILED.to_owned()),
        },
    }
}

/// Apply the global side effects for a classified failure: push the toast
/// and, for 401, reset the session. Returns the path to force-navigate to,
/// if any. Pure over the two state containers so the 401 contract is
/// testable off the browser; idempotent under duplicate 401s.
pub fn apply_failure_effects<S: SnapshotStore>(
    error: &ApiError,
    session: &mut SessionStore<S>,
    app: &mut AppState,
) -> Option<&'static str> {
    match error {
        ApiError::Unauthorized => {
            session.clear();
            app.notify_error(error.to_string());
            Some(LOGIN_PATH)
        }
        ApiError::Server { .. } => {
            app.notify_error(MSG_SERVER);
            None
        }
        ApiError::Network | ApiError::Api { .. } | ApiError::Decode => {
            app.notify_error(error.to_string());
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// The shared HTTP client. `Copy` because it only holds signal handles; pages
/// receive it from context and pass it to the `net::api` wrappers.
#[derive(Clone, Copy)]
pub struct Gateway {
    session: RwSignal<SessionStore>,
    app: RwSignal<AppState>,
}

impl Gateway {
    pub fn new(session: RwSignal<SessionStore>, app: RwSignal<AppState>) -> Self {
        Self { session, app }
    }

    pub fn session(&self) -> RwSignal<SessionStore> {
        self.session
    }

    pub fn app(&self) -> RwSignal<AppState> {
        self.app
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Verb::Get, path, None).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request(Verb::Get, &with_query(path, query), None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let value = serde_json::to_value(body).map_err(|_| ApiError::Decode)?;
        self.request(Verb::Post, path, Some(value)).await
    }

    /// POST with an empty body (lifecycle actions: start, stop, release...).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Verb::Post, path, None).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let value = serde_json::to_value(body).map_err(|_| ApiError::Decode)?;
        self.request(Verb::Put, path, Some(value)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Verb::Delete, path, None).await
    }

    /// POST a multipart form. The login endpoint takes its credentials this
    /// way (OAuth2 password flow).
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let Ok(form) = web_sys::FormData::new() else {
                return Err(ApiError::Network);
            };
            for (name, value) in fields {
                if form.append_with_str(name, value).is_err() {
                    return Err(ApiError::Network);
                }
            }
            self.begin();
            let sent = self
                .builder(Verb::Post, path)
                .body(form)
                .map_err(|_| ApiError::Network);
            let result = match sent {
                Ok(request) => self.finish::<T>(request.send().await).await,
                Err(error) => Err(error),
            };
            self.end();
            self.settle(result)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, fields);
            self.begin();
            let result = Err(ApiError::Network);
            self.end();
            self.settle(result)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn request<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        self.begin();
        let builder = self.builder(verb, path);
        let result = match body {
            Some(value) => match builder.json(&value) {
                Ok(request) => self.finish::<T>(request.send().await).await,
                Err(_) => Err(ApiError::Network),
            },
            None => self.finish::<T>(builder.send().await).await,
        };
        self.end();
        self.settle(result)
    }

    #[cfg(not(feature = "hydrate"))]
    async fn request<T: DeserializeOwned>(
        &self,
        _verb: Verb,
        _path: &str,
        _body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        self.begin();
        let result = Err(ApiError::Network);
        self.end();
        self.settle(result)
    }

    #[cfg(feature = "hydrate")]
    fn builder(&self, verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        };
        let url = format!("{API_BASE}{path}");
        let mut builder = RequestBuilder::new(&url).method(method);
        let token = self.session.with_untracked(|s| s.token().to_owned());
        if !token.is_empty() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        builder
    }

    /// Decode a transport result: pass 2xx payloads through untouched,
    /// classify everything else.
    #[cfg(feature = "hydrate")]
    async fn finish<T: DeserializeOwned>(
        &self,
        sent: Result<gloo_net::http::Response, gloo_net::Error>,
    ) -> Result<T, ApiError> {
        use super::types::ErrorBody;

        let Ok(response) = sent else {
            return Err(classify(None, None));
        };
        if response.ok() {
            return response.json::<T>().await.map_err(|_| ApiError::Decode);
        }
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(classify(Some(response.status()), detail))
    }

    /// Run the failure dispatcher, then hand the outcome back to the caller.
    fn settle<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(error) = &result {
            self.dispatch_failure(error);
        }
        result
    }

    fn begin(&self) {
        self.app.update(AppState::begin_request);
    }

    fn end(&self) {
        self.app.update(AppState::end_request);
    }

    fn dispatch_failure(&self, error: &ApiError) {
        let mut target = None;
        self.session.update(|session| {
            self.app.update(|app| {
                target = apply_failure_effects(error, session, app);
            });
        });
        if let Some(target) = target {
            force_navigate(target);
        }
    }
}

/// Hard navigation used for the 401 logout path; a no-op when already on the
/// target route, so racing 401s do not stack redirects.
fn force_navigate(target: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.pathname().ok().as_deref() != Some(target) {
                let _ = location.set_href(target);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}

fn with_query(path: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return path.to_owned();
    }
    let mut url = String::from(path);
    for (i, (name, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(name);
        url.push('=');
        url.push_str(value);
    }
    url
}
