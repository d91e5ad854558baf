//! Desired-state data model for a GitHub organization
//!
//! Every struct here deserializes strictly: unknown fields in a fragment are
//! a schema error, not silently dropped configuration. Fields default to
//! their zero value so a fragment may populate any subset of the schema.

use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate root
// ============================================================================

/// The merged desired state of one GitHub organization
///
/// Built up by appending fragments in load order; collections are
/// append-only unions. Uniqueness of resource keys (role name, username,
/// team name, repository name) is a contract on the input documents and is
/// not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub custom_roles: Vec<CustomRole>,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub repositories: Vec<Repository>,
}

impl Config {
    /// Append another fragment's collections onto this aggregate
    ///
    /// Order within each collection is preserved: existing entries first,
    /// then the fragment's entries in document order. Nothing is dropped,
    /// reordered, or deduplicated.
    pub fn merge(&mut self, fragment: Config) {
        self.custom_roles.extend(fragment.custom_roles);
        self.users.extend(fragment.users);
        self.teams.extend(fragment.teams);
        self.repositories.extend(fragment.repositories);
    }

    /// Check whether the aggregate holds no declarations at all
    pub fn is_empty(&self) -> bool {
        self.custom_roles.is_empty()
            && self.users.is_empty()
            && self.teams.is_empty()
            && self.repositories.is_empty()
    }
}

// ============================================================================
// Org-level entities
// ============================================================================

/// A custom organization role
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct CustomRole {
    /// Role name, unique per org; used as the resource key
    pub name: String,
    /// Role the custom role inherits from (e.g. "read", "write")
    pub base_role: String,
    pub description: String,
    /// Fine-grained permissions granted on top of the base role
    pub permissions: Vec<String>,
}

/// An organization member
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct User {
    /// GitHub username, unique; used as the resource key
    pub username: String,
    /// Org-level role (e.g. "member", "admin")
    pub role: String,
    /// Team memberships, with a role scoped per team
    pub teams: Vec<UserTeamRef>,
}

/// A user's membership in one team
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct UserTeamRef {
    /// Team name as declared in the team's own entry (not the slug)
    pub name: String,
    /// Membership role within the team (e.g. "member", "maintainer")
    pub role: String,
}

/// A team declaration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Team {
    /// Human-readable team name; the canonical slug is derived from it
    pub name: String,
    pub description: String,
    /// Team visibility (e.g. "closed", "secret")
    pub privacy: String,
    /// Identifier of the parent team, if any
    ///
    /// A literal `0` in legacy documents also means "no parent".
    pub parent_team_id: Option<u64>,
}

impl Team {
    /// The canonical slug for this team
    pub fn slug(&self) -> String {
        slug(&self.name)
    }

    /// Parent team id with the legacy `0` sentinel normalized away
    pub fn parent_id(&self) -> Option<u64> {
        self.parent_team_id.filter(|id| *id != 0)
    }
}

/// Derive the canonical slug for a team name
///
/// Lower-cases the name and replaces each space with a hyphen. Stable under
/// re-derivation.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

// ============================================================================
// Repositories
// ============================================================================

/// A repository declaration with its nested policies
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Repository {
    /// Repository name; used as the resource key
    pub name: String,
    pub description: String,
    pub homepage_url: String,

    // Merge settings
    pub allow_auto_merge: bool,
    pub allow_merge_commit: bool,
    pub allow_rebase_merge: bool,
    pub allow_squash_merge: bool,
    pub delete_branch_on_merge: bool,

    // Creation and lifecycle
    pub auto_init: bool,
    pub archived: bool,
    pub is_template: bool,
    pub visibility: String,
    pub license_template: String,
    pub topics: Vec<String>,

    // Feature toggles
    pub has_discussions: bool,
    pub has_downloads: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub vulnerability_alerts: bool,
    pub web_commit_signoff_required: bool,

    /// GitHub Pages configuration; composed into the declaration only when
    /// it actually selects a build type or source branch
    pub pages: Option<Pages>,
    /// Template repository this one is generated from
    pub template: Option<RepoTemplate>,

    pub default_branch: String,
    pub branches_protection: Vec<BranchProtection>,
    pub collaborators: Vec<Collaborator>,
    pub teams: Vec<RepoTeamRef>,
}

/// GitHub Pages settings
///
/// `build_type == "workflow"` and `branch != ""` are mutually exclusive ways
/// of enabling pages; if neither is set the block is inert.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Pages {
    pub build_type: String,
    pub branch: String,
    pub path: String,
    pub cname: String,
}

/// Template repository reference
///
/// Only composed into the declaration when both fields are non-empty, so
/// `template: {}` declares nothing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RepoTemplate {
    pub owner: String,
    pub repository: String,
}

impl RepoTemplate {
    /// Whether this reference actually names a template
    pub fn is_set(&self) -> bool {
        !self.owner.is_empty() && !self.repository.is_empty()
    }
}

// ============================================================================
// Branch protection
// ============================================================================

/// A branch-protection rule for one pattern
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct BranchProtection {
    /// Branch name pattern the rule applies to (e.g. "main", "release/*")
    pub pattern: String,

    pub enforce_admins: bool,
    pub allows_deletions: bool,
    pub allows_force_pushes: bool,
    pub required_linear_history: bool,
    pub require_signed_commits: bool,
    pub require_conversation_resolution: bool,

    // Status checks
    pub require_branches_up_to_date: bool,
    pub status_checks: Vec<String>,

    // Pull request reviews
    pub dismiss_stale_reviews: bool,
    pub restrict_dismissals: bool,
    pub require_code_owner_reviews: bool,
    pub required_approving_review_count: u32,
    pub require_last_push_approval: bool,

    /// Bare names of teams or users allowed to push to matching branches.
    /// An empty list means "no push restriction", not "restrict to nobody".
    pub push_restrictions: Vec<String>,
    /// Bare names of teams allowed to dismiss reviews. Teams only.
    pub dismissal_restrictions: Vec<String>,
    /// Bare names of teams or users allowed to bypass PR requirements
    pub pull_request_bypassers: Vec<String>,
}

/// A direct collaborator on a repository
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Collaborator {
    pub username: String,
    pub permission: String,
}

/// A team granted access to a repository
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RepoTeamRef {
    /// Team name; slug derivation applies unless `id` is set
    pub name: String,
    /// Pre-resolved team identifier, used as-is when importing an existing
    /// team that is not declared in this run
    pub id: Option<String>,
    pub permission: String,
}

impl RepoTeamRef {
    /// The identifier handed to the provider: explicit id when present,
    /// otherwise the derived slug
    pub fn team_id(&self) -> String {
        self.id.clone().unwrap_or_else(|| slug(&self.name))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lowercases_and_hyphenates() {
        assert_eq!(slug("Core Infra"), "core-infra");
        assert_eq!(slug("My Team Name"), "my-team-name");
        assert_eq!(slug("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_slug_is_stable() {
        let once = slug("Release Engineering");
        assert_eq!(slug(&once), once);
    }

    #[test]
    fn test_team_parent_id_zero_means_none() {
        let team = Team {
            name: "Core Infra".to_string(),
            parent_team_id: Some(0),
            ..Default::default()
        };
        assert_eq!(team.parent_id(), None);

        let child = Team {
            parent_team_id: Some(42),
            ..Default::default()
        };
        assert_eq!(child.parent_id(), Some(42));
    }

    #[test]
    fn test_repo_team_ref_prefers_explicit_id() {
        let by_name = RepoTeamRef {
            name: "Core Infra".to_string(),
            id: None,
            permission: "push".to_string(),
        };
        assert_eq!(by_name.team_id(), "core-infra");

        let imported = RepoTeamRef {
            name: "Core Infra".to_string(),
            id: Some("T_123".to_string()),
            permission: "push".to_string(),
        };
        assert_eq!(imported.team_id(), "T_123");
    }

    #[test]
    fn test_template_is_set_requires_both_fields() {
        assert!(!RepoTemplate::default().is_set());
        assert!(
            !RepoTemplate {
                owner: "octo".to_string(),
                repository: String::new(),
            }
            .is_set()
        );
        assert!(
            RepoTemplate {
                owner: "octo".to_string(),
                repository: "starter".to_string(),
            }
            .is_set()
        );
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut config = Config::default();
        config.merge(Config {
            teams: vec![Team {
                name: "A".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        });
        config.merge(Config {
            teams: vec![Team {
                name: "B".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        });

        let names: Vec<_> = config.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_strict_parsing_rejects_unknown_fields() {
        let doc = "teams:\n  - name: Core Infra\n    colour: red\n";
        let parsed: Result<Config, _> = serde_yaml::from_str(doc);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_fragment_may_populate_any_subset() {
        let doc = "users:\n  - username: octocat\n    role: member\n";
        let config: Config = serde_yaml::from_str(doc).unwrap();
        assert_eq!(config.users.len(), 1);
        assert!(config.teams.is_empty());
        assert!(config.repositories.is_empty());
    }
}
