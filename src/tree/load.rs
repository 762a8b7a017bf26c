use super::types::{RouteNode, RouteTree};
use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supplies a fresh route tree snapshot for a project.
///
/// Called once per generation pass; implementations must not cache between calls.
pub trait RouteSource: Send + Sync {
    /// Load the route tree for the project rooted at `root`.
    fn load(&self, root: &Path) -> anyhow::Result<RouteTree>;

    /// Files and directories whose changes can alter the route tree.
    fn watch_paths(&self, root: &Path) -> Vec<PathBuf>;
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    routes: IndexMap<String, RouteNode>,
}

/// Reads the route tree from a JSON or YAML manifest.
///
/// ```yaml
/// routes:
///   root: {}
///   routes/users: { parentId: root, path: users }
///   routes/users/$id: { parentId: routes/users, path: ":id" }
/// ```
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    /// `path` is resolved against the project root when relative.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ManifestSource { path: path.into() }
    }

    fn resolve(&self, root: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            root.join(&self.path)
        }
    }
}

impl RouteSource for ManifestSource {
    fn load(&self, root: &Path) -> anyhow::Result<RouteTree> {
        let path = self.resolve(root);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read route manifest: {}", path.display()))?;
        parse_manifest(&content, &path)
            .with_context(|| format!("Failed to parse route manifest: {}", path.display()))
    }

    fn watch_paths(&self, root: &Path) -> Vec<PathBuf> {
        vec![self.resolve(root)]
    }
}

/// Parse manifest text, choosing YAML or JSON from the file extension.
pub fn parse_manifest(content: &str, path: &Path) -> anyhow::Result<RouteTree> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let manifest: ManifestFile = if is_yaml {
        serde_yaml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };

    Ok(manifest
        .routes
        .into_iter()
        .map(|(key, mut node)| {
            if node.id.is_empty() {
                node.id = key;
            }
            node
        })
        .collect())
}
