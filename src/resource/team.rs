//! Team declarations: teams, their memberships, and repository grants

use serde::Serialize;

/// Arguments for a team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamArgs {
    /// Human-readable name; the declaration key is the derived slug
    pub name: String,
    pub description: String,
    pub privacy: String,
    /// Always false: default maintainers are managed through explicit
    /// membership declarations instead
    pub create_default_maintainer: bool,
    /// Provider-side identifier of the parent team, when nested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_team_id: Option<String>,
}

/// Arguments for one user's membership in one team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMembershipArgs {
    /// Slug of the team the membership belongs to
    pub team: String,
    pub username: String,
    /// Membership role scoped to this team
    pub role: String,
}

/// Arguments granting a team access to a repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRepositoryArgs {
    pub repository: String,
    /// Pre-resolved id when importing an existing team, otherwise the slug
    pub team_id: String,
    pub permission: String,
}
