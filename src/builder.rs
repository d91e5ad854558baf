//! Resource graph builder
//!
//! Walks the merged [`Config`] once and registers every resource
//! declaration with the engine in dependency order: custom roles, org
//! memberships, teams with their memberships, then repositories with their
//! default branch, branch protections, collaborators, and team grants.
//! Construction is sequential and deterministic; the first failure aborts
//! the pass.

use crate::directory::Directory;
use crate::engine::Engine;
use crate::error::GraphError;
use crate::resolver::{RestrictionKind, resolve_names};
use crate::resource::{
    BranchDefaultArgs, BranchProtectionArgs, CollaboratorArgs, CustomRoleArgs, Declaration,
    MembershipArgs, PagesArgs, RepositoryArgs, ResourceArgs, ReviewPolicyArgs, StatusCheckArgs,
    TeamArgs, TeamMembershipArgs, TeamRepositoryArgs, TemplateArgs,
};
use log::debug;
use orgspec::{BranchProtection, Config, Repository};

/// Build the complete declaration set for one synchronization pass
pub fn build(
    config: &Config,
    directory: &dyn Directory,
    engine: &mut dyn Engine,
) -> Result<(), GraphError> {
    for role in &config.custom_roles {
        register(
            engine,
            Declaration::new(
                role.name.clone(),
                ResourceArgs::CustomRole(CustomRoleArgs {
                    name: role.name.clone(),
                    base_role: role.base_role.clone(),
                    description: role.description.clone(),
                    permissions: role.permissions.clone(),
                }),
            ),
        )?;
    }
    debug!("registered {} custom roles", config.custom_roles.len());

    for user in &config.users {
        register(
            engine,
            Declaration::protected(
                user.username.clone(),
                ResourceArgs::Membership(MembershipArgs {
                    username: user.username.clone(),
                    role: user.role.clone(),
                }),
            ),
        )?;
    }
    debug!("registered {} org memberships", config.users.len());

    for team in &config.teams {
        let slug = team.slug();
        register(
            engine,
            Declaration::protected(
                slug.clone(),
                ResourceArgs::Team(TeamArgs {
                    name: team.name.clone(),
                    description: team.description.clone(),
                    privacy: team.privacy.clone(),
                    create_default_maintainer: false,
                    parent_team_id: team.parent_id().map(|id| id.to_string()),
                }),
            ),
        )?;

        // In-memory join: every declared user whose membership list names
        // this team gets a membership declaration under it.
        for user in &config.users {
            for membership in &user.teams {
                if membership.name != team.name {
                    continue;
                }
                register(
                    engine,
                    Declaration::new(
                        format!("{}-{}", user.username, slug),
                        ResourceArgs::TeamMembership(TeamMembershipArgs {
                            team: slug.clone(),
                            username: user.username.clone(),
                            role: membership.role.clone(),
                        }),
                    ),
                )?;
            }
        }
    }
    debug!("registered {} teams", config.teams.len());

    for repo in &config.repositories {
        build_repository(repo, directory, engine)?;
    }
    debug!("registered {} repositories", config.repositories.len());

    Ok(())
}

/// Register a repository and everything nested under it
fn build_repository(
    repo: &Repository,
    directory: &dyn Directory,
    engine: &mut dyn Engine,
) -> Result<(), GraphError> {
    register(
        engine,
        Declaration::protected(
            repo.name.clone(),
            ResourceArgs::Repository(repository_args(repo)),
        ),
    )?;

    register(
        engine,
        Declaration::new(
            repo.name.clone(),
            ResourceArgs::BranchDefault(BranchDefaultArgs {
                repository: repo.name.clone(),
                branch: repo.default_branch.clone(),
            }),
        ),
    )?;

    for protection in &repo.branches_protection {
        let args = protection_args(&repo.name, protection, directory)?;
        register(
            engine,
            Declaration::new(
                format!("{}-{}", repo.name, protection.pattern),
                ResourceArgs::BranchProtection(args),
            ),
        )?;
    }

    for collaborator in &repo.collaborators {
        register(
            engine,
            Declaration::new(
                format!("{}-{}", repo.name, collaborator.username),
                ResourceArgs::Collaborator(CollaboratorArgs {
                    repository: repo.name.clone(),
                    username: collaborator.username.clone(),
                    permission: collaborator.permission.clone(),
                    permission_diff_suppression: false,
                }),
            ),
        )?;
    }

    for team in &repo.teams {
        register(
            engine,
            Declaration::new(
                format!("{}-{}", repo.name, orgspec::slug(&team.name)),
                ResourceArgs::TeamRepository(TeamRepositoryArgs {
                    repository: repo.name.clone(),
                    team_id: team.team_id(),
                    permission: team.permission.clone(),
                }),
            ),
        )?;
    }

    Ok(())
}

/// Compose the repository arguments, including conditional substructures
fn repository_args(repo: &Repository) -> RepositoryArgs {
    RepositoryArgs {
        name: repo.name.clone(),
        description: repo.description.clone(),
        homepage_url: repo.homepage_url.clone(),
        allow_auto_merge: repo.allow_auto_merge,
        allow_merge_commit: repo.allow_merge_commit,
        allow_rebase_merge: repo.allow_rebase_merge,
        allow_squash_merge: repo.allow_squash_merge,
        delete_branch_on_merge: repo.delete_branch_on_merge,
        auto_init: repo.auto_init,
        archived: repo.archived,
        is_template: repo.is_template,
        visibility: repo.visibility.clone(),
        license_template: repo.license_template.clone(),
        topics: repo.topics.clone(),
        has_discussions: repo.has_discussions,
        has_downloads: repo.has_downloads,
        has_issues: repo.has_issues,
        has_projects: repo.has_projects,
        has_wiki: repo.has_wiki,
        vulnerability_alerts: repo.vulnerability_alerts,
        web_commit_signoff_required: repo.web_commit_signoff_required,
        pages: PagesArgs::compose(repo.pages.as_ref()),
        template: TemplateArgs::compose(repo.template.as_ref()),
    }
}

/// Resolve restriction lists and compose one branch-protection declaration
fn protection_args(
    repo_name: &str,
    protection: &BranchProtection,
    directory: &dyn Directory,
) -> Result<BranchProtectionArgs, GraphError> {
    let push = resolve_names(
        directory,
        &protection.push_restrictions,
        RestrictionKind::PushRestrictions,
    )?;
    let dismissal = resolve_names(
        directory,
        &protection.dismissal_restrictions,
        RestrictionKind::DismissalRestrictions,
    )?;
    let bypassers = resolve_names(
        directory,
        &protection.pull_request_bypassers,
        RestrictionKind::PullRequestBypassers,
    )?;

    Ok(BranchProtectionArgs {
        repository: repo_name.to_string(),
        pattern: protection.pattern.clone(),
        enforce_admins: protection.enforce_admins,
        allows_deletions: protection.allows_deletions,
        allows_force_pushes: protection.allows_force_pushes,
        required_linear_history: protection.required_linear_history,
        require_signed_commits: protection.require_signed_commits,
        require_conversation_resolution: protection.require_conversation_resolution,
        required_status_checks: StatusCheckArgs {
            strict: protection.require_branches_up_to_date,
            contexts: protection.status_checks.clone(),
        },
        required_pull_request_reviews: ReviewPolicyArgs {
            dismiss_stale_reviews: protection.dismiss_stale_reviews,
            restrict_dismissals: protection.restrict_dismissals,
            require_code_owner_reviews: protection.require_code_owner_reviews,
            required_approving_review_count: protection.required_approving_review_count,
            require_last_push_approval: protection.require_last_push_approval,
            dismissal_restrictions: dismissal,
            pull_request_bypassers: bypassers,
        },
        // An unpopulated list must not lock out all pushers.
        restrict_pushes: if push.is_empty() { None } else { Some(push) },
    })
}

fn register(engine: &mut dyn Engine, declaration: Declaration) -> Result<(), GraphError> {
    let kind = declaration.kind();
    let key = declaration.key.clone();
    engine
        .register(declaration)
        .map_err(|cause| GraphError::Engine { kind, key, cause })
}

// ============================================================================
// Tests
// ============================================================================
