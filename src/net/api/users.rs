//! User management endpoints (admin only, enforced server-side).

use crate::net::gateway::{ApiError, Gateway};
use crate::net::types::{User, UserBrief, UserCreate, UserUpdate};

pub async fn list(gateway: Gateway, skip: u32, limit: u32) -> Result<Vec<UserBrief>, ApiError> {
    gateway
        .get_query("/users", &[("skip", skip.to_string()), ("limit", limit.to_string())])
        .await
}

pub async fn create(gateway: Gateway, user: &UserCreate) -> Result<User, ApiError> {
    gateway.post("/users", user).await
}

pub async fn get(gateway: Gateway, user_id: i64) -> Result<User, ApiError> {
    gateway.get(&format!("/users/{user_id}")).await
}

pub async fn update(gateway: Gateway, user_id: i64, update: &UserUpdate) -> Result<User, ApiError> {
    gateway.put(&format!("/users/{user_id}"), update).await
}

pub async fn remove(gateway: Gateway, user_id: i64) -> Result<serde_json::Value, ApiError> {
    gateway.delete(&format!("/users/{user_id}")).await
}
