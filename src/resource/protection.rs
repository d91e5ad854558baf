//! Branch-protection declarations

use serde::Serialize;

/// Arguments for one branch-protection rule
///
/// Restriction lists carry canonical directory identifiers by the time a
/// declaration is constructed; bare-name resolution happens in the builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchProtectionArgs {
    pub repository: String,
    pub pattern: String,

    pub enforce_admins: bool,
    pub allows_deletions: bool,
    pub allows_force_pushes: bool,
    pub required_linear_history: bool,
    pub require_signed_commits: bool,
    pub require_conversation_resolution: bool,

    pub required_status_checks: StatusCheckArgs,
    pub required_pull_request_reviews: ReviewPolicyArgs,

    /// Present only when at least one push restriction resolved. An empty
    /// source list means "no push restriction", never "restrict to nobody".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_pushes: Option<Vec<String>>,
}

/// Required status checks for a protected branch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCheckArgs {
    /// Require branches to be up to date before merging
    pub strict: bool,
    pub contexts: Vec<String>,
}

/// Required pull-request review policy for a protected branch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewPolicyArgs {
    pub dismiss_stale_reviews: bool,
    pub restrict_dismissals: bool,
    pub require_code_owner_reviews: bool,
    pub required_approving_review_count: u32,
    pub require_last_push_approval: bool,
    /// Resolved team identifiers; always included, possibly empty
    pub dismissal_restrictions: Vec<String>,
    /// Resolved team or user identifiers; always included, possibly empty
    pub pull_request_bypassers: Vec<String>,
}
