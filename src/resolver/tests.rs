use super::*;
use crate::tree::{RouteNode, RouteTree};

fn node(id: &str, parent: Option<&str>, path: Option<&str>) -> RouteNode {
    RouteNode::new(id, parent, path)
}

fn entries(table: &RoutesTable) -> Vec<(String, Vec<String>)> {
    table
        .iter()
        .map(|(path, params)| (path.clone(), params.clone()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_users_id_example() {
    let tree: RouteTree = [
        node("A", None, Some("users")),
        node("B", Some("A"), Some(":id")),
    ]
    .into_iter()
    .collect();

    let table = resolve(&tree);
    assert_eq!(
        entries(&table),
        vec![
            ("users".to_string(), vec![]),
            ("users/:id".to_string(), strings(&["id"])),
        ]
    );
}

#[test]
fn test_single_static_route() {
    let tree: RouteTree = [node("A", None, Some("about"))].into_iter().collect();
    let table = resolve(&tree);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("about"), Some(&[][..]));
}

#[test]
fn test_empty_tree() {
    let table = resolve(&RouteTree::new());
    assert!(table.is_empty());
}

#[test]
fn test_layout_nodes_are_skipped_in_paths() {
    let tree: RouteTree = [
        node("root", None, None),
        node("users", Some("root"), Some("users")),
        node("layout", Some("users"), None),
        node("user", Some("layout"), Some(":userId")),
        node("nested-layout", Some("user"), None),
        node("post", Some("nested-layout"), Some("posts/:postId")),
    ]
    .into_iter()
    .collect();

    let table = resolve(&tree);
    assert_eq!(
        table.paths().collect::<Vec<_>>(),
        vec!["users", "users/:userId", "users/:userId/posts/:postId"]
    );
    assert_eq!(
        table.get("users/:userId/posts/:postId").unwrap(),
        &strings(&["userId", "postId"])[..]
    );
    assert!(!table.contains(""));
    assert!(!table.contains("/"));
}

#[test]
fn test_empty_path_contributes_no_segment() {
    let tree: RouteTree = [
        node("root", None, Some("")),
        node("users", Some("root"), Some("users")),
        node("user", Some("users"), Some(":id")),
    ]
    .into_iter()
    .collect();

    let table = resolve(&tree);
    assert_eq!(
        entries(&table),
        vec![
            ("users".to_string(), vec![]),
            ("users/:id".to_string(), strings(&["id"])),
        ]
    );
    assert!(!table.contains(""));
}

#[test]
fn test_traversal_is_depth_first_in_source_order() {
    // Children appear after their siblings in the source; traversal still
    // finishes each subtree before moving to the next sibling.
    let tree: RouteTree = [
        node("b", None, Some("b")),
        node("a", None, Some("a")),
        node("a1", Some("a"), Some("one")),
        node("b1", Some("b"), Some("one")),
        node("a2", Some("a"), Some("two")),
    ]
    .into_iter()
    .collect();

    let table = resolve(&tree);
    assert_eq!(
        table.paths().collect::<Vec<_>>(),
        vec!["b", "b/one", "a", "a/one", "a/two"]
    );
}

#[test]
fn test_orphans_are_unreachable() {
    let tree: RouteTree = [
        node("a", None, Some("a")),
        node("ghost", Some("missing"), Some("ghost")),
    ]
    .into_iter()
    .collect();
    let table = resolve(&tree);
    assert_eq!(table.paths().collect::<Vec<_>>(), vec!["a"]);
}

#[test]
fn test_duplicate_param_names_preserved() {
    let tree: RouteTree = [
        node("org", None, Some(":id")),
        node("team", Some("org"), Some("teams/:id")),
    ]
    .into_iter()
    .collect();
    let table = resolve(&tree);
    assert_eq!(table.get(":id/teams/:id").unwrap(), &strings(&["id", "id"])[..]);
}

#[test]
fn test_collision_overwrites_keeping_position() {
    let tree: RouteTree = [
        node("root", None, None),
        node("first", Some("root"), Some("x/:a")),
        node("other", Some("root"), Some("y")),
        node("layout", Some("root"), None),
        node("second", Some("layout"), Some("x/:a")),
    ]
    .into_iter()
    .collect();

    let table = resolve(&tree);
    assert_eq!(table.paths().collect::<Vec<_>>(), vec!["x/:a", "y"]);

    let collisions = find_collisions(&tree);
    assert_eq!(
        collisions,
        vec![Collision {
            path: "x/:a".into(),
            previous: "first".into(),
            id: "second".into(),
        }]
    );
}

#[test]
fn test_collision_policy_error() {
    let tree: RouteTree = [
        node("first", None, Some("dup")),
        node("second", None, Some("dup")),
    ]
    .into_iter()
    .collect();

    let err = resolve_with(&tree, CollisionPolicy::Error).unwrap_err();
    assert!(matches!(err, ResolveError::PathCollision(ref c) if c.path == "dup"));
    assert!(err.to_string().contains("'first' and 'second'"));

    let table = resolve_with(&tree, CollisionPolicy::Overwrite).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn test_resolve_is_idempotent() {
    let tree: RouteTree = [
        node("root", None, None),
        node("a", Some("root"), Some("docs")),
        node("b", Some("a"), Some(":lang/:page")),
        node("c", Some("root"), Some("blog/:slug")),
    ]
    .into_iter()
    .collect();

    let first = resolve(&tree);
    let second = resolve(&tree);
    assert_eq!(first, second);
    assert_eq!(entries(&first), entries(&second));
}

#[test]
fn test_keys_are_joined_chain_segments() {
    let tree: RouteTree = [
        node("r", None, Some("a")),
        node("s", Some("r"), None),
        node("t", Some("s"), Some("b/c")),
        node("u", Some("t"), Some(":d")),
    ]
    .into_iter()
    .collect();

    // Walk each node's ancestors independently and compare with the resolver.
    let table = resolve(&tree);
    for n in tree.nodes().filter(|n| n.path.is_some()) {
        let mut segments = Vec::new();
        let mut cursor = Some(n);
        while let Some(current) = cursor {
            if let Some(path) = &current.path {
                segments.push(path.as_str());
            }
            cursor = current.parent_id.as_deref().and_then(|p| tree.get(p));
        }
        segments.reverse();
        let key = segments.join("/");
        assert!(table.contains(&key), "missing {key}");
        assert_eq!(table.get(&key).unwrap(), &extract_params(segments)[..]);
    }
}
