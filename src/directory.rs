//! Directory lookup seam
//!
//! Team slugs and usernames live in overlapping free-text namespaces, so
//! resolution needs an external directory to decide what a bare name
//! denotes. The trait keeps "not found" a tagged outcome rather than an
//! error: a transport fault is still an `Err`, and the two are never
//! conflated.

use anyhow::Result;
use orgspec::Config;
use std::collections::HashMap;

/// Outcome of a directory lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The entity exists; carries its canonical identifier
    Found(String),
    /// The entity does not exist in the directory
    NotFound,
}

/// Read-only lookup service mapping slugs and usernames to canonical ids
pub trait Directory {
    /// Look up a team by its canonical slug
    fn team_by_slug(&self, slug: &str) -> Result<Lookup>;

    /// Look up a user by their literal username
    fn user_by_username(&self, username: &str) -> Result<Lookup>;
}

/// Directory backed by the declarations in the loaded config itself
///
/// Used for offline planning: a name resolves if and only if the loaded
/// documents declare the corresponding team or user, and the identifier is
/// the slug or username. References to entities that only exist remotely
/// need a provider-backed [`Directory`] implementation.
#[derive(Debug)]
pub struct ConfigDirectory {
    teams: HashMap<String, String>,
    users: HashMap<String, String>,
}

impl ConfigDirectory {
    /// Index the teams and users declared in `config`
    pub fn new(config: &Config) -> Self {
        let teams = config
            .teams
            .iter()
            .map(|team| (team.slug(), team.slug()))
            .collect();
        let users = config
            .users
            .iter()
            .map(|user| (user.username.clone(), user.username.clone()))
            .collect();
        Self { teams, users }
    }

    fn lookup(map: &HashMap<String, String>, key: &str) -> Lookup {
        match map.get(key) {
            Some(id) => Lookup::Found(id.clone()),
            None => Lookup::NotFound,
        }
    }
}

impl Directory for ConfigDirectory {
    fn team_by_slug(&self, slug: &str) -> Result<Lookup> {
        Ok(Self::lookup(&self.teams, slug))
    }

    fn user_by_username(&self, username: &str) -> Result<Lookup> {
        Ok(Self::lookup(&self.users, username))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use orgspec::{Team, User};

    #[test]
    fn test_config_directory_indexes_slugs_and_usernames() {
        let config = Config {
            teams: vec![Team {
                name: "Core Infra".to_string(),
                ..Default::default()
            }],
            users: vec![User {
                username: "octocat".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let directory = ConfigDirectory::new(&config);

        assert_eq!(
            directory.team_by_slug("core-infra").unwrap(),
            Lookup::Found("core-infra".to_string())
        );
        assert_eq!(
            directory.team_by_slug("Core Infra").unwrap(),
            Lookup::NotFound
        );
        assert_eq!(
            directory.user_by_username("octocat").unwrap(),
            Lookup::Found("octocat".to_string())
        );
        assert_eq!(directory.user_by_username("nobody").unwrap(), Lookup::NotFound);
    }
}
