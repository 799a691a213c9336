//! Route components. Deliberately thin: layout polish lives in CSS and the
//! interesting behavior (guarding, token handling, failure toasts) lives in
//! `routes`, `state`, and `net`.

pub mod dashboard;
pub mod ip_allocations;
pub mod ip_pools;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod users;
pub mod vps_create;
pub mod vps_detail;
pub mod vps_list;
