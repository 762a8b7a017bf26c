//! # routegen
//!
//! **routegen** turns a web application's route tree into typed URL helpers.
//! It flattens the tree into a table of full path patterns and their
//! parameter names, then writes a small package that application code imports:
//!
//! ```ts
//! import { $path, $params } from ".routegen";
//!
//! $path("users/:id", { id: 42 }, { tab: "posts" });
//! const { id } = $params("users/:id", useParams());
//! ```
//!
//! ## Architecture
//!
//! - **[`tree`]** - route tree model and sources (manifest file, file conventions)
//! - **[`resolver`]** - flattens the tree into a [`RoutesTable`]
//! - **[`generator`]** - renders the runtime table and type declarations and writes them
//! - **[`validator`]** - warnings for orphan routes, empty segments, repeated parameters
//! - **[`pipeline`]** - one load → resolve → generate → write pass
//! - **[`watch`]** - re-runs the pass on file changes
//! - **[`config`]** / **[`logging`]** / **[`cli`]** - the `routegen` binary
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(routegen)
//!     participant Source as RouteSource
//!     participant Resolver as resolver::resolve
//!     participant Generator as generator::generate
//!     participant FS as File System
//!
//!     CLI->>Source: load(project_root)
//!     Source-->>CLI: RouteTree
//!     CLI->>Resolver: resolve_with(&tree, policy)
//!     Resolver-->>CLI: RoutesTable
//!     CLI->>Generator: generate(&table)
//!     Generator-->>CLI: GeneratedModules
//!     CLI->>FS: write_artifacts(node_modules/.routegen)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use routegen::{generate, resolve, RouteNode, RouteTree};
//!
//! let tree: RouteTree = [
//!     RouteNode::new("users", None, Some("users")),
//!     RouteNode::new("user", Some("users"), Some(":id")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let table = resolve(&tree);
//! assert_eq!(table.get("users/:id"), Some(&["id".to_string()][..]));
//!
//! let modules = generate(&table).unwrap();
//! assert!(modules.type_module.contains("params: { id: string | number }"));
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod logging;
pub mod pipeline;
pub mod resolver;
pub mod tree;
pub mod validator;
pub mod watch;

pub use config::Config;
pub use generator::{generate, write_artifacts, GeneratedModules};
pub use pipeline::{run_once, run_project};
pub use resolver::{resolve, resolve_with, CollisionPolicy, RoutesTable};
pub use tree::{RouteNode, RouteSource, RouteTree};
