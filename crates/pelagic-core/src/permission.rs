use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role type of unauthenticated visitors.
pub const PUBLIC_ROLE: &str = "public";
/// Role type of signed-in users.
pub const AUTHENTICATED_ROLE: &str = "authenticated";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub role_type: String,
}

/// Request to allow one controller action for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    /// Format: api::{content_type}.{content_type}.{action}
    pub action: String,
    pub role: u64,
}

impl PermissionGrant {
    pub fn new(content_type: &str, action: &str, role: u64) -> Self {
        Self {
            action: pelagic_naming::permission_action(content_type, action),
            role,
        }
    }
}

/// A persisted grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: u64,
    pub action: String,
    pub role: u64,
    pub created_at: DateTime<Utc>,
}
