use super::params::extract_params;
use super::table::RoutesTable;
use crate::tree::{RouteNode, RouteTree};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// What to do when two routes resolve to the same full path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Keep the route visited last
    #[default]
    Overwrite,
    /// Fail the pass
    Error,
}

/// Two routes that resolved to the same full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// The shared full path
    pub path: String,
    /// Route that produced the entry first
    pub previous: String,
    /// Route that overwrote it
    pub id: String,
}

/// Resolution failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Two routes produced the same full path under [`CollisionPolicy::Error`]
    PathCollision(Collision),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::PathCollision(c) => write!(
                f,
                "routes '{}' and '{}' both resolve to path '{}'",
                c.previous, c.id, c.path
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

type ChildIndex<'t> = IndexMap<Option<&'t str>, Vec<&'t RouteNode>>;

struct Resolution<'t> {
    table: RoutesTable,
    owners: HashMap<String, &'t str>,
    collisions: Vec<Collision>,
}

impl<'t> Resolution<'t> {
    fn record(&mut self, path: String, params: Vec<String>, id: &'t str) {
        if let Some(previous) = self.owners.insert(path.clone(), id) {
            self.collisions.push(Collision {
                path: path.clone(),
                previous: previous.to_string(),
                id: id.to_string(),
            });
        }
        self.table.insert(path, params);
    }
}

/// Resolve a route tree into its [`RoutesTable`].
///
/// Colliding paths are overwritten, last visited wins. Use [`find_collisions`]
/// to list them; `validator::lint_tree` reports them as warnings.
pub fn resolve(tree: &RouteTree) -> RoutesTable {
    let resolution = walk(tree);
    for c in &resolution.collisions {
        debug!(path = %c.path, previous = %c.previous, id = %c.id, "route path collision, keeping last");
    }
    resolution.table
}

/// Resolve a route tree, applying `policy` to path collisions.
pub fn resolve_with(tree: &RouteTree, policy: CollisionPolicy) -> Result<RoutesTable, ResolveError> {
    match policy {
        CollisionPolicy::Overwrite => Ok(resolve(tree)),
        CollisionPolicy::Error => {
            let mut resolution = walk(tree);
            if resolution.collisions.is_empty() {
                Ok(resolution.table)
            } else {
                Err(ResolveError::PathCollision(resolution.collisions.swap_remove(0)))
            }
        }
    }
}

/// Every collision in `tree`, in traversal order.
pub fn find_collisions(tree: &RouteTree) -> Vec<Collision> {
    walk(tree).collisions
}

fn walk(tree: &RouteTree) -> Resolution<'_> {
    let index = tree.children_index();
    let mut resolution = Resolution {
        table: RoutesTable::new(),
        owners: HashMap::new(),
        collisions: Vec::new(),
    };
    let mut chain = Vec::new();
    visit(&index, None, &mut chain, &mut resolution);
    debug!(
        nodes = tree.len(),
        paths = resolution.table.len(),
        "resolved route tree"
    );
    resolution
}

/// Depth-first over the children of `parent`, in source order.
///
/// `chain` holds the path segments from the root boundary down to `parent`;
/// layout nodes, with no path or an empty one, never enter it.
fn visit<'t>(
    index: &ChildIndex<'t>,
    parent: Option<&'t str>,
    chain: &mut Vec<&'t str>,
    out: &mut Resolution<'t>,
) {
    let Some(children) = index.get(&parent) else {
        return;
    };
    for &node in children {
        let extended = match node.path.as_deref() {
            Some(segment) if !segment.is_empty() => {
                chain.push(segment);
                let params = extract_params(chain.iter().copied());
                out.record(chain.join("/"), params, &node.id);
                true
            }
            _ => false,
        };
        visit(index, Some(node.id.as_str()), chain, out);
        if extended {
            chain.pop();
        }
    }
}
