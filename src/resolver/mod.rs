//! # Route Resolver
//!
//! Flattens a [`RouteTree`](crate::tree::RouteTree) into a [`RoutesTable`]: one
//! entry per path-bearing node, keyed by the `/`-join of every path segment from
//! the root boundary down to that node, holding the parameter names captured
//! along the way.
//!
//! ```text
//! root (layout)            ─┐
//! ├── users                 │  "users"          → []
//! │   └── :id               │  "users/:id"      → ["id"]
//! │       └── (layout)      │
//! │           └── posts/:p  │  "users/:id/posts/:p" → ["id", "p"]
//! └── about                ─┘  "about"          → []
//! ```
//!
//! Children are visited in source order and the table keeps that order, so the
//! generated artifacts are stable for an unchanged tree. The root path `/` is
//! never produced here; the generator adds it.

mod params;
mod resolve;
mod table;
#[cfg(test)]
mod tests;

pub use params::{extract_params, PARAM_MARKER};
pub use resolve::{find_collisions, resolve, resolve_with, Collision, CollisionPolicy, ResolveError};
pub use table::RoutesTable;
