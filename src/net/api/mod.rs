//! Typed endpoint wrappers, one module per backend resource.
//!
//! Each function is a thin call through the shared [`Gateway`]; global error
//! handling (toasts, 401 logout) happens there, so callers only add local
//! handling where a page needs it.
//!
//! [`Gateway`]: super::gateway::Gateway

pub mod auth;
pub mod ip_allocations;
pub mod ip_pools;
pub mod users;
pub mod vps;
