use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One node of an application's route tree.
///
/// Nodes only point at their parent. A node without a `path` is a layout that
/// groups children without adding a URL segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    /// Unique, opaque identifier
    #[serde(default)]
    pub id: String,
    /// Identifier of the containing node, absent for root-level nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Path segment contributed by this node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Route module backing this node, when the source knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Whether this is an index route of its parent
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub index: bool,
}

impl RouteNode {
    pub fn new(id: impl Into<String>, parent_id: Option<&str>, path: Option<&str>) -> Self {
        RouteNode {
            id: id.into(),
            parent_id: parent_id.map(str::to_string),
            path: path.map(str::to_string),
            file: None,
            index: false,
        }
    }
}

/// All nodes of a route tree keyed by id, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTree {
    nodes: IndexMap<String, RouteNode>,
}

impl RouteTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, replacing any node with the same id in place.
    pub fn insert(&mut self, node: RouteNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn get(&self, id: &str) -> Option<&RouteNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in source order.
    pub fn nodes(&self) -> impl Iterator<Item = &RouteNode> {
        self.nodes.values()
    }

    /// Group node ids by parent id, preserving source order within each group.
    ///
    /// Root-level nodes are grouped under `None`.
    pub fn children_index(&self) -> IndexMap<Option<&str>, Vec<&RouteNode>> {
        let mut index: IndexMap<Option<&str>, Vec<&RouteNode>> = IndexMap::new();
        for node in self.nodes.values() {
            index
                .entry(node.parent_id.as_deref())
                .or_default()
                .push(node);
        }
        index
    }
}

impl FromIterator<RouteNode> for RouteTree {
    fn from_iter<I: IntoIterator<Item = RouteNode>>(iter: I) -> Self {
        let mut tree = RouteTree::new();
        for node in iter {
            tree.insert(node);
        }
        tree
    }
}
