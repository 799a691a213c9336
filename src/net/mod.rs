//! Networking: the HTTP gateway, wire DTOs, and typed endpoint wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the single chokepoint every call goes through (token
//! attachment, failure classification); `api` holds one thin module per
//! backend resource; `types` defines the shared wire schema.

pub mod api;
pub mod gateway;
pub mod types;
