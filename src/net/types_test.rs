use super::*;

fn sample_user_json(role: &str, is_superuser: bool) -> String {
    format!(
        r#"{{
            "id": 7,
            "username": "ops",
            "email": "ops@example.com",
            "first_name": null,
            "last_name": null,
            "role": "{role}",
            "is_active": true,
            "is_superuser": {is_superuser},
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }}"#
    )
}

#[test]
fn role_ordering_matches_privilege_hierarchy() {
    assert!(Role::Superuser > Role::Admin);
    assert!(Role::Admin > Role::Operator);
    assert!(Role::Operator > Role::User);
    assert!(Role::User > Role::Guest);
}

#[test]
fn role_deserializes_known_values() {
    for (raw, expected) in [
        ("\"guest\"", Role::Guest),
        ("\"user\"", Role::User),
        ("\"operator\"", Role::Operator),
        ("\"admin\"", Role::Admin),
        ("\"superuser\"", Role::Superuser),
    ] {
        let role: Role = serde_json::from_str(raw).unwrap();
        assert_eq!(role, expected, "{raw}");
    }
}

#[test]
fn unknown_role_string_falls_back_to_guest() {
    let role: Role = serde_json::from_str("\"auditor\"").unwrap();
    assert_eq!(role, Role::Guest);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Superuser).unwrap(), "\"superuser\"");
}

#[test]
fn user_deserializes_full_profile() {
    let user: User = serde_json::from_str(&sample_user_json("operator", false)).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Operator);
    assert!(!user.is_superuser);
}

#[test]
fn user_role_defaults_when_missing() {
    let raw = r#"{
        "id": 1,
        "username": "a",
        "email": "a@example.com",
        "first_name": null,
        "last_name": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, Role::User);
    assert!(user.is_active);
}

#[test]
fn user_update_omits_unset_fields() {
    let update = UserUpdate { email: Some("new@example.com".to_owned()), ..UserUpdate::default() };
    let raw = serde_json::to_string(&update).unwrap();
    assert_eq!(raw, r#"{"email":"new@example.com"}"#);
}

#[test]
fn allocation_status_round_trips() {
    let status: AllocationStatus = serde_json::from_str("\"reserved\"").unwrap();
    assert_eq!(status, AllocationStatus::Reserved);
    assert_eq!(serde_json::to_string(&status).unwrap(), "\"reserved\"");
}

#[test]
fn error_body_tolerates_missing_detail() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.detail, None);
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
    assert_eq!(body.detail.as_deref(), Some("nope"));
}

#[test]
fn vps_brief_deserializes_without_ip() {
    let raw = r#"{
        "id": 3,
        "name": "web-1",
        "vmid": 103,
        "node_name": "pve1",
        "status": "running",
        "os_type": "linux",
        "os_template": "debian-12",
        "ip_address": null
    }"#;
    let brief: VpsServerBrief = serde_json::from_str(raw).unwrap();
    assert_eq!(brief.vmid, 103);
    assert_eq!(brief.ip_address, None);
}
