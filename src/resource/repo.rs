//! Repository declarations: the repository itself, its default branch, and
//! direct collaborators
//!
//! Pages and template sub-structures follow presence-based composition: a
//! block is emitted only when the source data actually selects it, so an
//! unset block never shows up as state drift.

use orgspec::{Pages, RepoTemplate};
use serde::Serialize;

/// Arguments for a repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryArgs {
    pub name: String,
    pub description: String,
    pub homepage_url: String,

    pub allow_auto_merge: bool,
    pub allow_merge_commit: bool,
    pub allow_rebase_merge: bool,
    pub allow_squash_merge: bool,
    pub delete_branch_on_merge: bool,

    pub auto_init: bool,
    pub archived: bool,
    pub is_template: bool,
    pub visibility: String,
    pub license_template: String,
    pub topics: Vec<String>,

    pub has_discussions: bool,
    pub has_downloads: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub vulnerability_alerts: bool,
    pub web_commit_signoff_required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<PagesArgs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateArgs>,
}

/// Composed GitHub Pages block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagesArgs {
    /// Set to "workflow" for Actions-built pages; absent for source-built
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_type: Option<String>,
    /// Branch-backed source; absent for workflow builds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PagesSourceArgs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
}

/// Source branch for branch-built pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagesSourceArgs {
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl PagesArgs {
    /// Compose a pages block from the declared settings, if any apply
    ///
    /// A "workflow" build type wins and never carries a source block; a
    /// non-empty branch yields a source-built block; anything else composes
    /// nothing. The two forms are mutually exclusive.
    pub fn compose(pages: Option<&Pages>) -> Option<Self> {
        let pages = pages?;

        if pages.build_type == "workflow" {
            return Some(Self {
                build_type: Some("workflow".to_string()),
                source: None,
                cname: non_empty(&pages.cname),
            });
        }

        if pages.branch.is_empty() {
            return None;
        }

        Some(Self {
            build_type: None,
            source: Some(PagesSourceArgs {
                branch: pages.branch.clone(),
                path: non_empty(&pages.path),
            }),
            cname: non_empty(&pages.cname),
        })
    }
}

/// Composed template reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateArgs {
    pub owner: String,
    pub repository: String,
}

impl TemplateArgs {
    /// Compose a template block only when both fields are set
    pub fn compose(template: Option<&RepoTemplate>) -> Option<Self> {
        let template = template?;
        if !template.is_set() {
            return None;
        }
        Some(Self {
            owner: template.owner.clone(),
            repository: template.repository.clone(),
        })
    }
}

/// Arguments for a repository's default branch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchDefaultArgs {
    pub repository: String,
    pub branch: String,
}

/// Arguments for a direct collaborator on a repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollaboratorArgs {
    pub repository: String,
    pub username: String,
    pub permission: String,
    /// Always false: the declared permission is authoritative
    pub permission_diff_suppression: bool,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_workflow_has_no_source_block() {
        let pages = Pages {
            build_type: "workflow".to_string(),
            branch: "gh-pages".to_string(),
            ..Default::default()
        };
        let composed = PagesArgs::compose(Some(&pages)).unwrap();
        assert_eq!(composed.build_type.as_deref(), Some("workflow"));
        assert!(composed.source.is_none());
    }

    #[test]
    fn test_pages_branch_yields_source_block() {
        let pages = Pages {
            branch: "gh-pages".to_string(),
            path: "/docs".to_string(),
            cname: "docs.example.org".to_string(),
            ..Default::default()
        };
        let composed = PagesArgs::compose(Some(&pages)).unwrap();
        assert!(composed.build_type.is_none());
        let source = composed.source.unwrap();
        assert_eq!(source.branch, "gh-pages");
        assert_eq!(source.path.as_deref(), Some("/docs"));
        assert_eq!(composed.cname.as_deref(), Some("docs.example.org"));
    }

    #[test]
    fn test_pages_source_block_omits_empty_path_and_cname() {
        let pages = Pages {
            branch: "main".to_string(),
            ..Default::default()
        };
        let composed = PagesArgs::compose(Some(&pages)).unwrap();
        let source = composed.source.unwrap();
        assert!(source.path.is_none());
        assert!(composed.cname.is_none());
    }

    #[test]
    fn test_pages_unset_composes_nothing() {
        assert!(PagesArgs::compose(None).is_none());
        assert!(PagesArgs::compose(Some(&Pages::default())).is_none());
    }

    #[test]
    fn test_template_requires_both_fields() {
        assert!(TemplateArgs::compose(None).is_none());
        assert!(TemplateArgs::compose(Some(&RepoTemplate::default())).is_none());

        let partial = RepoTemplate {
            owner: "octo".to_string(),
            repository: String::new(),
        };
        assert!(TemplateArgs::compose(Some(&partial)).is_none());

        let full = RepoTemplate {
            owner: "octo".to_string(),
            repository: "starter".to_string(),
        };
        let composed = TemplateArgs::compose(Some(&full)).unwrap();
        assert_eq!(composed.owner, "octo");
        assert_eq!(composed.repository, "starter");
    }
}
