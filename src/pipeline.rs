//! One generation pass: load → resolve → generate → write.

use crate::config::Config;
use crate::generator::{generate, write_artifacts};
use crate::resolver::resolve_with;
use crate::validator::{lint_tree, report_issues};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{info, info_span};

/// Run a full pass for the project at `root` and return the artifact directory.
///
/// Nothing is written unless the tree loads, resolves and renders.
pub fn run_once(root: &Path, config: &Config) -> anyhow::Result<PathBuf> {
    let span = info_span!("generate", root = %root.display());
    let _entered = span.enter();

    let tree = config
        .route_source()
        .load(root)
        .context("Failed to load route tree")?;
    let table = resolve_with(&tree, config.collisions)?;
    report_issues(&lint_tree(&tree, &table));

    let modules = generate(&table)?;
    let output_dir = config.resolve_output_dir(root)?;
    write_artifacts(&output_dir, &modules, &config.module_name)?;

    info!(
        nodes = tree.len(),
        routes = table.len(),
        parameterized = table.parameterized().count(),
        output = %output_dir.display(),
        "generated route types"
    );
    Ok(output_dir)
}

/// Reload the configuration from `root`, then run a pass.
pub fn run_project(root: &Path) -> anyhow::Result<PathBuf> {
    let config = Config::load(root)?;
    run_once(root, &config)
}
