//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain: `session` owns the auth token and cached
//! profile, `app` owns transient UI flags (loading, sidebar, notifications).
//! Both are plain structs held in `RwSignal` contexts by `app::App`, so the
//! logic stays unit-testable off the browser.

pub mod app;
pub mod session;
