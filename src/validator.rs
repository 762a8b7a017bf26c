//! Route tree checks that never stop a pass on their own.

use crate::resolver::{find_collisions, RoutesTable};
use crate::tree::RouteTree;
use tracing::warn;

/// A suspicious construct found in a route tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Check `tree` and its resolved `table` for orphans, empty segments,
/// repeated parameter names and colliding full paths.
pub fn lint_tree(tree: &RouteTree, table: &RoutesTable) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for node in tree.nodes() {
        if let Some(parent) = node.parent_id.as_deref() {
            if tree.get(parent).is_none() {
                issues.push(ValidationIssue::new(
                    &node.id,
                    "OrphanRoute",
                    format!("parent '{parent}' does not exist; route is never reached"),
                ));
            }
        }
        if let Some(path) = node.path.as_deref().filter(|p| !p.is_empty()) {
            if path.split('/').any(str::is_empty) {
                issues.push(ValidationIssue::new(
                    &node.id,
                    "EmptySegment",
                    format!("path '{path}' contains an empty segment"),
                ));
            }
        }
    }

    for (path, params) in table {
        let mut seen: Vec<&str> = Vec::with_capacity(params.len());
        for name in params {
            if seen.contains(&name.as_str()) {
                issues.push(ValidationIssue::new(
                    path,
                    "DuplicateParam",
                    format!("parameter '{name}' is captured more than once"),
                ));
            } else {
                seen.push(name);
            }
        }
    }

    for c in find_collisions(tree) {
        issues.push(ValidationIssue::new(
            &c.path,
            "PathCollision",
            format!(
                "routes '{}' and '{}' resolve to the same path; '{}' wins",
                c.previous, c.id, c.id
            ),
        ));
    }

    issues
}

/// Log every issue as a warning.
pub fn report_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        warn!(
            location = %issue.location,
            kind = %issue.kind,
            "{}",
            issue.message
        );
    }
}
