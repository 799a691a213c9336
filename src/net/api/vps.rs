//! VPS lifecycle endpoints: CRUD plus power actions and backups.

use crate::net::gateway::{ApiError, Gateway};
use crate::net::types::{
    VpsBackup, VpsBackupCreate, VpsServer, VpsServerBrief, VpsServerCreate, VpsServerUpdate,
    VpsStatusUpdate,
};

pub async fn list(gateway: Gateway, skip: u32, limit: u32) -> Result<Vec<VpsServerBrief>, ApiError> {
    gateway
        .get_query("/vps", &[("skip", skip.to_string()), ("limit", limit.to_string())])
        .await
}

pub async fn create(gateway: Gateway, vps: &VpsServerCreate) -> Result<VpsServer, ApiError> {
    gateway.post("/vps", vps).await
}

pub async fn get(gateway: Gateway, vps_id: i64) -> Result<VpsServer, ApiError> {
    gateway.get(&format!("/vps/{vps_id}")).await
}

pub async fn update(
    gateway: Gateway,
    vps_id: i64,
    update: &VpsServerUpdate,
) -> Result<VpsServer, ApiError> {
    gateway.put(&format!("/vps/{vps_id}"), update).await
}

pub async fn remove(gateway: Gateway, vps_id: i64) -> Result<serde_json::Value, ApiError> {
    gateway.delete(&format!("/vps/{vps_id}")).await
}

pub async fn start(gateway: Gateway, vps_id: i64) -> Result<VpsStatusUpdate, ApiError> {
    gateway.post_empty(&format!("/vps/{vps_id}/start")).await
}

pub async fn stop(gateway: Gateway, vps_id: i64) -> Result<VpsStatusUpdate, ApiError> {
    gateway.post_empty(&format!("/vps/{vps_id}/stop")).await
}

pub async fn restart(gateway: Gateway, vps_id: i64) -> Result<VpsStatusUpdate, ApiError> {
    gateway.post_empty(&format!("/vps/{vps_id}/restart")).await
}

pub async fn create_backup(
    gateway: Gateway,
    vps_id: i64,
    backup: &VpsBackupCreate,
) -> Result<VpsBackup, ApiError> {
    gateway.post(&format!("/vps/{vps_id}/backup"), backup).await
}

pub async fn backups(gateway: Gateway, vps_id: i64) -> Result<Vec<VpsBackup>, ApiError> {
    gateway.get(&format!("/vps/{vps_id}/backups")).await
}

/// Ask the backend to re-poll hypervisor status for every VPS.
pub async fn refresh_statuses(gateway: Gateway) -> Result<serde_json::Value, ApiError> {
    gateway.post_empty("/vps/update-status").await
}
