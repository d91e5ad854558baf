//! Error types for graph construction

use crate::resolver::RestrictionKind;
use thiserror::Error;

/// Errors that abort a graph-construction pass
///
/// Every variant is fatal: there is no warn-and-continue mode, and retries
/// across passes belong to the orchestration engine.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A bare name resolved to neither a team nor a user
    #[error(
        "cannot resolve {name:?} in {kind}: no team with slug {slug:?} and no user {name:?}"
    )]
    UnknownActor {
        name: String,
        slug: String,
        kind: RestrictionKind,
    },

    /// A bare name in a teams-only restriction list is not a team
    #[error(
        "cannot resolve {name:?} in {kind}: no team with slug {slug:?} (only teams may appear here)"
    )]
    UnknownTeam {
        name: String,
        slug: String,
        kind: RestrictionKind,
    },

    /// The directory lookup itself failed (transport fault, not "not found")
    #[error("directory lookup for {name:?} in {kind} failed: {cause}")]
    Lookup {
        name: String,
        kind: RestrictionKind,
        cause: anyhow::Error,
    },

    /// The orchestration engine rejected a declaration
    #[error("failed to register {kind} {key:?}: {cause}")]
    Engine {
        kind: &'static str,
        key: String,
        cause: anyhow::Error,
    },
}
