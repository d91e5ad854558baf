//! Typed resource declarations handed to the orchestration engine
//!
//! A declaration is pure data: a key that is unique within its kind, a
//! protect flag, and kind-specific arguments. The engine owns diffing,
//! planning, and the actual provider calls; nothing here touches the
//! network.

pub mod org;
pub mod protection;
pub mod repo;
pub mod team;

pub use org::{CustomRoleArgs, MembershipArgs};
pub use protection::{BranchProtectionArgs, ReviewPolicyArgs, StatusCheckArgs};
pub use repo::{
    BranchDefaultArgs, CollaboratorArgs, PagesArgs, PagesSourceArgs, RepositoryArgs, TemplateArgs,
};
pub use team::{TeamArgs, TeamMembershipArgs, TeamRepositoryArgs};

use serde::Serialize;

/// One desired-state declaration for the orchestration engine
///
/// The key identifies the declaration across runs within its kind; the
/// engine uses it for identity and update-in-place semantics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub key: String,
    /// Destructive replace disallowed for this resource
    pub protect: bool,
    #[serde(flatten)]
    pub args: ResourceArgs,
}

impl Declaration {
    /// A plain declaration
    pub fn new(key: impl Into<String>, args: ResourceArgs) -> Self {
        Self {
            key: key.into(),
            protect: false,
            args,
        }
    }

    /// A declaration the engine must never destructively replace
    pub fn protected(key: impl Into<String>, args: ResourceArgs) -> Self {
        Self {
            key: key.into(),
            protect: true,
            args,
        }
    }

    /// The declaration's kind label
    pub fn kind(&self) -> &'static str {
        self.args.kind()
    }
}

/// Kind-specific declaration arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "args", rename_all = "snake_case")]
pub enum ResourceArgs {
    CustomRole(CustomRoleArgs),
    Membership(MembershipArgs),
    Team(TeamArgs),
    TeamMembership(TeamMembershipArgs),
    Repository(RepositoryArgs),
    BranchDefault(BranchDefaultArgs),
    BranchProtection(BranchProtectionArgs),
    Collaborator(CollaboratorArgs),
    TeamRepository(TeamRepositoryArgs),
}

impl ResourceArgs {
    /// Stable label for the declaration kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CustomRole(_) => "custom_role",
            Self::Membership(_) => "membership",
            Self::Team(_) => "team",
            Self::TeamMembership(_) => "team_membership",
            Self::Repository(_) => "repository",
            Self::BranchDefault(_) => "branch_default",
            Self::BranchProtection(_) => "branch_protection",
            Self::Collaborator(_) => "collaborator",
            Self::TeamRepository(_) => "team_repository",
        }
    }
}
