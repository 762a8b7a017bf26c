//! # Route Tree
//!
//! The route tree is the input of every generation pass: a flat set of
//! [`RouteNode`]s that reference their parent by id. Trees come from a
//! [`RouteSource`], either a manifest file ([`ManifestSource`]) or the route
//! modules found on disk ([`ConventionSource`]).

mod conventions;
mod load;
mod types;

pub use conventions::{ConventionSource, ROOT_ROUTE_ID};
pub use load::{parse_manifest, ManifestSource, RouteSource};
pub use types::{RouteNode, RouteTree};
