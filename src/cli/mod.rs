//! # CLI Module
//!
//! `routegen` takes a single flag:
//!
//! ```bash
//! # Generate once into node_modules/.routegen
//! routegen
//!
//! # Regenerate on every change to route files or routegen.toml
//! routegen --watch
//! routegen -w
//! ```
//!
//! Everything else is configured through `routegen.toml` and environment
//! variables, see [`crate::config`].

mod commands;


pub use commands::{run, run_cli, Cli};
