//! Request bodies.
//!
//! Create requests carry required fields directly and optional fields as
//! `Option`, omitted when `None` so the API applies its own defaults. Patched
//! requests wrap every field in [`Patch`].

use serde::Serialize;
use serde_json::Value;

use crate::patch::{PartialUpdate, Patch};

/// Create application request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationRequest {
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Provider primary key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<i64>,
    /// Launch URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_launch_url: Option<String>,
}

/// Partial application update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedApplicationRequest {
    /// Display name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    /// URL slug.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub slug: Patch<String>,
    /// Provider primary key.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub provider: Patch<i64>,
    /// Launch URL.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub meta_launch_url: Patch<String>,
    /// Authorization flow primary key.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub authorization_flow: Patch<String>,
    /// Authentication flow primary key.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub authentication_flow: Patch<String>,
    /// Invalidation flow primary key.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub invalidation_flow: Patch<String>,
}

impl PartialUpdate for PatchedApplicationRequest {}

/// Create user request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserRequest {
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the account is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Whether the account is a superuser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

/// Partial user update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedUserRequest {
    /// Login name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub username: Patch<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub email: Patch<String>,
    /// Full name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    /// Whether the account is active.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub is_active: Patch<bool>,
    /// Whether the account is a superuser.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub is_superuser: Patch<bool>,
    /// Full list of group primary keys.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub groups: Patch<Vec<Value>>,
    /// Full list of role primary keys.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub roles: Patch<Vec<Value>>,
}

impl PartialUpdate for PatchedUserRequest {}

/// Set password request.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordRequest {
    /// The new password.
    pub password: String,
}

/// Create group request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupRequest {
    /// Group name.
    pub name: String,
    /// Parent group primary key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Whether members are superusers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

/// Partial group update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedGroupRequest {
    /// Group name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    /// Parent group primary key.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub parent: Patch<String>,
    /// Whether members are superusers.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub is_superuser: Patch<bool>,
}

impl PartialUpdate for PatchedGroupRequest {}

/// Create role request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleRequest {
    /// Role name.
    pub name: String,
}

/// Partial role update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedRoleRequest {
    /// Role name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
}

impl PartialUpdate for PatchedRoleRequest {}

/// Partial provider update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedProviderRequest {
    /// Provider name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    /// Authorization flow primary key.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub authorization_flow: Patch<String>,
}

impl PartialUpdate for PatchedProviderRequest {}

/// Create OAuth2 provider request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OAuth2ProviderRequest {
    /// Provider name.
    pub name: String,
    /// Authorization flow primary key.
    pub authorization_flow: String,
    /// `confidential` or `public`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_type: Option<String>,
    /// OAuth2 client id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Create proxy provider request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProxyProviderRequest {
    /// Provider name.
    pub name: String,
    /// Authorization flow primary key.
    pub authorization_flow: String,
    /// Externally reachable URL.
    pub external_host: String,
    /// Upstream URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_host: Option<String>,
    /// Proxy mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Create flow request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlowRequest {
    /// Flow name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Title shown to users.
    pub title: String,
    /// Flow designation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
}

/// Partial flow update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedFlowRequest {
    /// Flow name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    /// URL slug.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub slug: Patch<String>,
    /// Title shown to users.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub title: Patch<String>,
    /// Flow designation.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub designation: Patch<String>,
}

impl PartialUpdate for PatchedFlowRequest {}

/// Create policy binding request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PolicyBindingRequest {
    /// Policy primary key.
    pub policy: String,
    /// Target object primary key.
    pub target: String,
    /// Evaluation order.
    pub order: i32,
    /// Invert the policy result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
    /// Evaluation timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

/// Create tenant request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TenantRequest {
    /// Database schema name.
    pub schema_name: String,
    /// Tenant name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tenant domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Partial tenant update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedTenantRequest {
    /// Database schema name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub schema_name: Patch<String>,
    /// Tenant name.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub name: Patch<String>,
    /// Tenant domain.
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub domain: Patch<String>,
}

impl PartialUpdate for PatchedTenantRequest {}
