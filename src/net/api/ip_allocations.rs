//! IP allocation endpoints. Allocations are addressed by IP string, not id.

use crate::net::gateway::{ApiError, Gateway};
use crate::net::types::{
    AllocationStatus, IpAllocation, IpAllocationCreate, IpAllocationUpdate, IpReservationCreate,
};

pub async fn list(
    gateway: Gateway,
    pool_id: Option<i64>,
    status: Option<AllocationStatus>,
) -> Result<Vec<IpAllocation>, ApiError> {
    let mut query = Vec::new();
    if let Some(pool_id) = pool_id {
        query.push(("ip_pool_id", pool_id.to_string()));
    }
    if let Some(status) = status {
        let label = match status {
            AllocationStatus::Available => "available",
            AllocationStatus::Allocated => "allocated",
            AllocationStatus::Reserved => "reserved",
        };
        query.push(("status", label.to_owned()));
    }
    gateway.get_query("/ip-allocations", &query).await
}

pub async fn allocate(
    gateway: Gateway,
    allocation: &IpAllocationCreate,
) -> Result<IpAllocation, ApiError> {
    gateway.post("/ip-allocations/allocate", allocation).await
}

pub async fn reserve(
    gateway: Gateway,
    reservation: &IpReservationCreate,
) -> Result<IpAllocation, ApiError> {
    gateway.post("/ip-allocations/reserve", reservation).await
}

/// Return an address to the available pool.
pub async fn release(gateway: Gateway, ip_address: &str) -> Result<IpAllocation, ApiError> {
    gateway.post_empty(&format!("/ip-allocations/release/{ip_address}")).await
}

pub async fn get(gateway: Gateway, ip_address: &str) -> Result<IpAllocation, ApiError> {
    gateway.get(&format!("/ip-allocations/{ip_address}")).await
}

pub async fn update(
    gateway: Gateway,
    ip_address: &str,
    update: &IpAllocationUpdate,
) -> Result<IpAllocation, ApiError> {
    gateway.put(&format!("/ip-allocations/{ip_address}"), update).await
}
