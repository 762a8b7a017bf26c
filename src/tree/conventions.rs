//! File-convention route discovery.
//!
//! Every route module under `<app_dir>/routes` becomes a node. Nesting follows
//! directories: `routes/users/$id.tsx` is a child of `routes/users.tsx` when that
//! module exists. Within a file name `.` also separates segments, so
//! `routes/users.$id.tsx` contributes `users/:id` directly under the root.
//!
//! | piece        | meaning                          |
//! |--------------|----------------------------------|
//! | `$name`      | parameter `:name`                |
//! | `$`          | splat `*`                        |
//! | `__name`     | pathless layout, no segment      |
//! | `index`      | index route (last piece only)    |
//! | `[text]`     | literal text, separators allowed |

use super::load::RouteSource;
use super::types::{RouteNode, RouteTree};
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Id of the synthetic layout node every discovered route hangs from.
pub const ROOT_ROUTE_ID: &str = "root";

const ROUTE_EXTENSIONS: [&str; 6] = ["tsx", "ts", "jsx", "js", "mdx", "md"];

/// Discovers the route tree from route module files.
#[derive(Debug, Clone)]
pub struct ConventionSource {
    app_dir: PathBuf,
}

impl ConventionSource {
    /// `app_dir` is resolved against the project root when relative.
    pub fn new(app_dir: impl Into<PathBuf>) -> Self {
        ConventionSource {
            app_dir: app_dir.into(),
        }
    }

    fn routes_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.app_dir).join("routes")
    }
}

impl RouteSource for ConventionSource {
    fn load(&self, root: &Path) -> anyhow::Result<RouteTree> {
        let routes_dir = self.routes_dir(root);
        let mut tree = RouteTree::new();
        tree.insert(RouteNode::new(ROOT_ROUTE_ID, None, None));

        if !routes_dir.is_dir() {
            tracing::debug!(dir = %routes_dir.display(), "no routes directory");
            return Ok(tree);
        }

        let modules = collect_route_modules(&routes_dir)?;
        for (id, file) in &modules {
            let parent = find_parent_id(id, modules.iter().map(|(id, _)| id.as_str()));
            let relative = match parent {
                Some(parent) => &id[parent.len() + 1..],
                None => &id["routes/".len()..],
            };
            let (path, index) = convention_path(relative);
            tree.insert(RouteNode {
                id: id.clone(),
                parent_id: Some(parent.unwrap_or(ROOT_ROUTE_ID).to_string()),
                path,
                file: Some(file.clone()),
                index,
            });
        }
        Ok(tree)
    }

    fn watch_paths(&self, root: &Path) -> Vec<PathBuf> {
        vec![self.routes_dir(root)]
    }
}

/// Route ids and module files (relative to the app directory), in file-name order.
fn collect_route_modules(routes_dir: &Path) -> anyhow::Result<Vec<(String, String)>> {
    let mut modules = Vec::new();
    for entry in WalkDir::new(routes_dir).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to scan routes directory: {}", routes_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_module = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ROUTE_EXTENSIONS.contains(&ext));
        if !is_module {
            continue;
        }
        let Ok(relative) = path.strip_prefix(routes_dir) else {
            continue;
        };
        let file = join_components(relative);
        let stem = join_components(&relative.with_extension(""));
        modules.push((format!("routes/{stem}"), format!("routes/{file}")));
    }
    Ok(modules)
}

fn join_components(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Longest other id that is a directory-prefix of `id`.
fn find_parent_id<'a>(id: &str, ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    ids.filter(|candidate| {
        id.len() > candidate.len() + 1
            && id.starts_with(candidate)
            && id.as_bytes()[candidate.len()] == b'/'
    })
    .max_by_key(|candidate| candidate.len())
}

/// Derive the path segment and index flag for an id remainder.
fn convention_path(relative: &str) -> (Option<String>, bool) {
    let pieces = split_pieces(relative);
    let last = pieces.len().saturating_sub(1);
    let mut index = false;
    let mut segments = Vec::new();

    for (i, piece) in pieces.iter().enumerate() {
        if i == last && piece == "index" {
            index = true;
        } else if piece.starts_with("__") {
            continue;
        } else if piece == "$" {
            segments.push("*".to_string());
        } else if let Some(name) = piece.strip_prefix('$') {
            segments.push(format!(":{name}"));
        } else {
            segments.push(piece.replace(['[', ']'], ""));
        }
    }

    let path = (!segments.is_empty()).then(|| segments.join("/"));
    (path, index)
}

/// Split on `/` and `.` outside `[...]` escapes.
fn split_pieces(relative: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for c in relative.chars() {
        match c {
            '[' => {
                escaped = true;
                current.push(c);
            }
            ']' => {
                escaped = false;
                current.push(c);
            }
            '/' | '.' if !escaped => {
                if !current.is_empty() {
                    pieces.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
