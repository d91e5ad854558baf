//! Org-level declarations: custom roles and memberships

use serde::Serialize;

/// Arguments for a custom organization role
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomRoleArgs {
    pub name: String,
    pub base_role: String,
    pub description: String,
    pub permissions: Vec<String>,
}

/// Arguments for an org membership
///
/// Membership records are too sensitive to silently recreate, so their
/// declarations always carry the protect flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipArgs {
    pub username: String,
    pub role: String,
}
