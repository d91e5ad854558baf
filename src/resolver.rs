//! Identity resolution for branch-protection restriction lists
//!
//! Policy authors write one list mixing teams and users, so each bare name
//! is resolved team-first: slugs are a strict transformation of team names
//! while usernames are untransformed, which minimizes accidental
//! collisions. Dismissal restrictions are the exception and only ever admit
//! teams.

use crate::directory::{Directory, Lookup};
use crate::error::GraphError;
use log::trace;
use std::fmt;

/// The restriction list a bare name appeared in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionKind {
    PushRestrictions,
    DismissalRestrictions,
    PullRequestBypassers,
}

impl RestrictionKind {
    /// Whether this list admits bare usernames as a fallback
    ///
    /// Dismissal restrictions never do; this mirrors the platform's
    /// capability model and must not be relaxed here.
    pub fn admits_users(self) -> bool {
        !matches!(self, Self::DismissalRestrictions)
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PushRestrictions => "push_restrictions",
            Self::DismissalRestrictions => "dismissal_restrictions",
            Self::PullRequestBypassers => "pull_request_bypassers",
        };
        write!(f, "{label}")
    }
}

/// Resolve every bare name in one restriction list, preserving list order
pub fn resolve_names(
    directory: &dyn Directory,
    names: &[String],
    kind: RestrictionKind,
) -> Result<Vec<String>, GraphError> {
    names
        .iter()
        .map(|name| resolve_name(directory, name, kind))
        .collect()
}

/// Resolve one bare name to a canonical directory identifier
///
/// Team lookup by derived slug comes first; the literal name is tried as a
/// username only for list kinds that admit users.
pub fn resolve_name(
    directory: &dyn Directory,
    name: &str,
    kind: RestrictionKind,
) -> Result<String, GraphError> {
    let slug = orgspec::slug(name);

    let team = directory
        .team_by_slug(&slug)
        .map_err(|cause| GraphError::Lookup {
            name: name.to_string(),
            kind,
            cause,
        })?;
    if let Lookup::Found(id) = team {
        trace!("resolved {name:?} as team {slug:?} -> {id}");
        return Ok(id);
    }

    if !kind.admits_users() {
        return Err(GraphError::UnknownTeam {
            name: name.to_string(),
            slug,
            kind,
        });
    }

    let user = directory
        .user_by_username(name)
        .map_err(|cause| GraphError::Lookup {
            name: name.to_string(),
            kind,
            cause,
        })?;
    match user {
        Lookup::Found(id) => {
            trace!("resolved {name:?} as user -> {id}");
            Ok(id)
        }
        Lookup::NotFound => Err(GraphError::UnknownActor {
            name: name.to_string(),
            slug,
            kind,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::testing::{BrokenDirectory, StaticDirectory};

    fn directory() -> StaticDirectory {
        StaticDirectory::default()
            .with_team("core-infra", "T_core")
            .with_user("octocat", "U_octo")
    }

    #[test]
    fn test_team_resolves_by_derived_slug() {
        let id =
            resolve_name(&directory(), "Core Infra", RestrictionKind::PushRestrictions).unwrap();
        assert_eq!(id, "T_core");
    }

    #[test]
    fn test_user_fallback_for_push_restrictions() {
        let id = resolve_name(&directory(), "octocat", RestrictionKind::PushRestrictions).unwrap();
        assert_eq!(id, "U_octo");
    }

    #[test]
    fn test_user_fallback_for_bypassers() {
        let id =
            resolve_name(&directory(), "octocat", RestrictionKind::PullRequestBypassers).unwrap();
        assert_eq!(id, "U_octo");
    }

    #[test]
    fn test_team_wins_when_name_matches_both_namespaces() {
        let both = StaticDirectory::default()
            .with_team("octocat", "T_octo")
            .with_user("octocat", "U_octo");
        let id = resolve_name(&both, "octocat", RestrictionKind::PushRestrictions).unwrap();
        assert_eq!(id, "T_octo");
    }

    #[test]
    fn test_dismissal_restrictions_never_admit_users() {
        let err = resolve_name(
            &directory(),
            "octocat",
            RestrictionKind::DismissalRestrictions,
        )
        .unwrap_err();
        match err {
            GraphError::UnknownTeam { name, kind, .. } => {
                assert_eq!(name, "octocat");
                assert_eq!(kind, RestrictionKind::DismissalRestrictions);
            }
            other => panic!("expected UnknownTeam, got: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_actor_names_input_and_kind() {
        let err = resolve_name(&directory(), "Ghost Team", RestrictionKind::PushRestrictions)
            .unwrap_err();
        match err {
            GraphError::UnknownActor { name, slug, kind } => {
                assert_eq!(name, "Ghost Team");
                assert_eq!(slug, "ghost-team");
                assert_eq!(kind, RestrictionKind::PushRestrictions);
            }
            other => panic!("expected UnknownActor, got: {other:?}"),
        }
    }

    #[test]
    fn test_transport_fault_is_distinct_from_not_found() {
        let err = resolve_name(
            &BrokenDirectory,
            "Core Infra",
            RestrictionKind::PushRestrictions,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::Lookup { .. }));
    }

    #[test]
    fn test_resolve_names_preserves_list_order() {
        let names = vec!["octocat".to_string(), "Core Infra".to_string()];
        let ids =
            resolve_names(&directory(), &names, RestrictionKind::PushRestrictions).unwrap();
        assert_eq!(ids, vec!["U_octo", "T_core"]);
    }
}
