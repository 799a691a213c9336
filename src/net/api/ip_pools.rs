//! IP pool endpoints.

use crate::net::gateway::{ApiError, Gateway};
use crate::net::types::{IpAllocation, IpPool, IpPoolCreate, IpPoolUpdate, IpUsageStats};

pub async fn list(gateway: Gateway, skip: u32, limit: u32) -> Result<Vec<IpPool>, ApiError> {
    gateway
        .get_query("/ip-pools", &[("skip", skip.to_string()), ("limit", limit.to_string())])
        .await
}

pub async fn create(gateway: Gateway, pool: &IpPoolCreate) -> Result<IpPool, ApiError> {
    gateway.post("/ip-pools", pool).await
}

pub async fn get(gateway: Gateway, pool_id: i64) -> Result<IpPool, ApiError> {
    gateway.get(&format!("/ip-pools/{pool_id}")).await
}

pub async fn update(gateway: Gateway, pool_id: i64, update: &IpPoolUpdate) -> Result<IpPool, ApiError> {
    gateway.put(&format!("/ip-pools/{pool_id}"), update).await
}

/// Every address row in the pool, whatever its status.
pub async fn allocations(gateway: Gateway, pool_id: i64) -> Result<Vec<IpAllocation>, ApiError> {
    gateway.get(&format!("/ip-pools/{pool_id}/allocations")).await
}

pub async fn stats(gateway: Gateway, pool_id: i64) -> Result<IpUsageStats, ApiError> {
    gateway.get(&format!("/ip-pools/{pool_id}/stats")).await
}
