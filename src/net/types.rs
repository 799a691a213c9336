//! Wire DTOs for the management API (`/api/v1`).
//!
//! DESIGN
//! ======
//! These types mirror the backend response schemas field-for-field so serde
//! decoding stays lossless. Timestamps travel as ISO 8601 strings; the
//! console displays them without interpreting.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Account role as carried on the user profile.
///
/// Variants are ordered by privilege so the guard can compare with `>=`.
/// `is_superuser` on the profile is a separate flag that dominates every
/// role check regardless of this value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fallback for role strings this build does not know about.
    Guest,
    #[default]
    User,
    Operator,
    Admin,
    Superuser,
}

// Decoded by hand: unknown role strings must degrade to `Guest` (no
// privileges) rather than fail the whole profile decode, and the variant
// order above is fixed by the `Ord` privilege ladder.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "user" => Self::User,
            "operator" => Self::Operator,
            "admin" => Self::Admin,
            "superuser" => Self::Superuser,
            _ => Self::Guest,
        })
    }
}

/// Full user profile as returned by `/auth/me` and the user CRUD endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    pub created_at: String,
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

/// Abbreviated user row for list views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserBrief {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Payload for registration and admin user creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Partial user update; unset fields are omitted from the request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Password change payload for the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}

/// Bearer token issued by `/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Structured error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// An IP pool (one managed subnet).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IpPool {
    pub id: i64,
    pub name: String,
    pub network: String,
    pub gateway: String,
    pub subnet_mask: String,
    /// Comma-separated resolver addresses, as stored server-side.
    pub dns_servers: String,
    pub vlan_id: Option<i64>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IpPoolCreate {
    pub name: String,
    pub network: String,
    pub gateway: String,
    pub subnet_mask: String,
    pub dns_servers: String,
    pub vlan_id: Option<i64>,
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IpPoolUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_servers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Lifecycle state of a single address within a pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationStatus {
    #[default]
    Available,
    Allocated,
    Reserved,
}

/// One address row from an IP pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IpAllocation {
    pub id: i64,
    pub ip_address: String,
    pub ip_pool_id: i64,
    pub status: AllocationStatus,
    pub hostname: Option<String>,
    pub mac_address: Option<String>,
    pub notes: Option<String>,
    pub user_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IpAllocationCreate {
    pub ip_address: String,
    pub user_id: Option<i64>,
    pub hostname: Option<String>,
    pub mac_address: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IpReservationCreate {
    pub ip_address: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IpAllocationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-pool address usage counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IpUsageStats {
    pub total: i64,
    pub available: i64,
    pub allocated: i64,
    pub reserved: i64,
    pub available_percentage: f64,
    pub allocated_percentage: f64,
    pub reserved_percentage: f64,
}

/// Full VPS record with its allocated address embedded when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VpsServer {
    pub id: i64,
    /// Hypervisor-side VM identifier.
    pub vmid: i64,
    pub user_id: i64,
    pub name: String,
    pub node_name: String,
    pub cpu_cores: u32,
    /// Memory in MB.
    pub memory: u64,
    /// Disk in GB.
    pub disk_size: u64,
    pub os_type: String,
    pub os_template: String,
    /// Bandwidth cap in Mbps.
    pub bandwidth: u32,
    pub status: String,
    pub ip_allocation_id: i64,
    pub ip_allocation: Option<IpAllocation>,
    pub config: Option<serde_json::Value>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub last_backup_at: Option<String>,
}

/// Abbreviated VPS row for list views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VpsServerBrief {
    pub id: i64,
    pub name: String,
    pub vmid: i64,
    pub node_name: String,
    pub status: String,
    pub os_type: String,
    pub os_template: String,
    pub ip_address: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VpsServerCreate {
    pub name: String,
    pub node_name: String,
    pub cpu_cores: u32,
    pub memory: u64,
    pub disk_size: u64,
    pub os_type: String,
    pub os_template: String,
    pub bandwidth: u32,
    pub notes: Option<String>,
    pub ip_allocation_id: Option<i64>,
    pub ip_pool_id: Option<i64>,
    pub config: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VpsServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VpsBackupCreate {
    pub storage: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_auto: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VpsBackup {
    pub id: i64,
    pub vps_id: i64,
    pub backup_id: String,
    pub file_name: String,
    /// Archive size in MB.
    pub file_size: f64,
    pub notes: Option<String>,
    pub is_auto: bool,
    pub created_at: String,
}

/// Minimal response for start/stop/restart actions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VpsStatusUpdate {
    pub id: i64,
    pub name: String,
    pub status: String,
}
